use super::AttenuationRow;

// Water optical lengths hard-coded in WCSim's materials builder, energies in eV
// and lengths in cm at unit tuning factors.
const WATER_ROWS: [AttenuationRow; 60] = [
    AttenuationRow::new(1.56962, 16.1419, 386_929.0, 7_790_020.0),
    AttenuationRow::new(1.58974, 18.278, 366_249.0, 7_403_010.0),
    AttenuationRow::new(1.61039, 21.0657, 346_398.0, 7_030_610.0),
    AttenuationRow::new(1.63157, 24.8568, 327_355.0, 6_672_440.0),
    AttenuationRow::new(1.65333, 30.3117, 309_097.0, 6_328_120.0),
    AttenuationRow::new(1.67567, 38.8341, 291_603.0, 5_997_320.0),
    AttenuationRow::new(1.69863, 54.0231, 274_853.0, 5_679_650.0),
    AttenuationRow::new(1.72222, 81.2306, 258_825.0, 5_374_770.0),
    AttenuationRow::new(1.74647, 120.909, 243_500.0, 5_082_340.0),
    AttenuationRow::new(1.77142, 160.238, 228_856.0, 4_802_000.0),
    AttenuationRow::new(1.7971, 193.771, 214_873.0, 4_533_420.0),
    AttenuationRow::new(1.82352, 215.017, 201_533.0, 4_276_280.0),
    AttenuationRow::new(1.85074, 227.747, 188_816.0, 4_030_220.0),
    AttenuationRow::new(1.87878, 243.85, 176_702.0, 3_794_950.0),
    AttenuationRow::new(1.90769, 294.036, 165_173.0, 3_570_120.0),
    AttenuationRow::new(1.93749, 321.647, 154_210.0, 3_355_440.0),
    AttenuationRow::new(1.96825, 342.81, 143_795.0, 3_150_590.0),
    AttenuationRow::new(1.99999, 362.827, 133_910.0, 2_955_270.0),
    AttenuationRow::new(2.03278, 378.041, 124_537.0, 2_769_170.0),
    AttenuationRow::new(2.06666, 449.378, 115_659.0, 2_592_000.0),
    AttenuationRow::new(2.10169, 739.434, 107_258.0, 2_423_470.0),
    AttenuationRow::new(2.13793, 1114.23, 99_318.2, 2_263_300.0),
    AttenuationRow::new(2.17543, 1435.56, 91_822.2, 2_111_200.0),
    AttenuationRow::new(2.21428, 1611.06, 84_754.0, 1_966_900.0),
    AttenuationRow::new(2.25454, 1764.18, 78_097.3, 1_830_120.0),
    AttenuationRow::new(2.29629, 2100.95, 71_836.5, 1_700_610.0),
    AttenuationRow::new(2.33962, 2292.9, 65_956.0, 1_578_100.0),
    AttenuationRow::new(2.38461, 2431.33, 60_440.6, 1_462_320.0),
    AttenuationRow::new(2.43137, 3053.6, 55_275.4, 1_353_040.0),
    AttenuationRow::new(2.47999, 4838.23, 50_445.6, 1_250_000.0),
    AttenuationRow::new(2.53061, 6539.65, 45_937.0, 1_152_960.0),
    AttenuationRow::new(2.58333, 7682.63, 41_735.2, 1_061_680.0),
    AttenuationRow::new(2.63829, 9137.28, 37_826.6, 975_936.0),
    AttenuationRow::new(2.69565, 12_220.9, 34_197.6, 895_491.0),
    AttenuationRow::new(2.75555, 15_270.7, 30_834.9, 820_125.0),
    AttenuationRow::new(2.81817, 19_051.5, 27_725.4, 749_619.0),
    AttenuationRow::new(2.88371, 23_671.3, 24_856.6, 683_760.0),
    AttenuationRow::new(2.95237, 29_191.1, 22_215.9, 622_339.0),
    AttenuationRow::new(3.02438, 35_567.9, 19_791.3, 565_152.0),
    AttenuationRow::new(3.09999, 42_583.0, 17_570.9, 512_000.0),
    AttenuationRow::new(3.17948, 49_779.6, 15_543.0, 462_688.0),
    AttenuationRow::new(3.26315, 56_465.3, 13_696.6, 417_027.0),
    AttenuationRow::new(3.35134, 61_830.0, 12_020.5, 374_832.0),
    AttenuationRow::new(3.44444, 65_174.6, 10_504.1, 335_923.0),
    AttenuationRow::new(3.54285, 66_143.7, 9137.15, 300_125.0),
    AttenuationRow::new(3.64705, 64_820.0, 7909.45, 267_267.0),
    AttenuationRow::new(3.75757, 61_635.0, 6811.3, 237_184.0),
    AttenuationRow::new(3.87499, 57_176.2, 5833.25, 209_715.0),
    AttenuationRow::new(3.99999, 52_012.1, 4966.2, 184_704.0),
    AttenuationRow::new(4.13332, 46_595.7, 4201.36, 162_000.0),
    AttenuationRow::new(4.27585, 41_242.1, 3530.28, 141_456.0),
    AttenuationRow::new(4.42856, 36_146.3, 2944.84, 122_931.0),
    AttenuationRow::new(4.59258, 31_415.4, 2437.28, 106_288.0),
    AttenuationRow::new(4.76922, 27_097.8, 2000.18, 91_395.2),
    AttenuationRow::new(4.95999, 23_205.7, 1626.5, 78_125.0),
    AttenuationRow::new(5.16665, 19_730.3, 1309.55, 66_355.2),
    AttenuationRow::new(5.39129, 16_651.6, 1043.03, 55_968.2),
    AttenuationRow::new(5.63635, 13_943.6, 821.016, 46_851.2),
    AttenuationRow::new(5.90475, 11_578.1, 637.97, 38_896.2),
    AttenuationRow::new(6.19998, 9526.13, 488.754, 32_000.0),
];

pub(super) fn water_rows() -> &'static [AttenuationRow] {
    &WATER_ROWS
}
