use super::MeasuredPoint;

// Measured pure-water absorption lengths compared against the WCSim curves.
// Energies in eV, lengths in m, in the order they were recorded (energies
// descend, some are repeated).
const LEIGH_WATER_POINTS: [MeasuredPoint; 189] = [
    MeasuredPoint::new(6.21, 1.42),
    MeasuredPoint::new(5.91, 3.9),
    MeasuredPoint::new(5.64, 6.34),
    MeasuredPoint::new(5.4, 8.76),
    MeasuredPoint::new(4.97, 14.16),
    MeasuredPoint::new(4.78, 17.39),
    MeasuredPoint::new(4.6, 23.31),
    MeasuredPoint::new(4.43, 24.27),
    MeasuredPoint::new(4.28, 34.36),
    MeasuredPoint::new(4.14, 47.17),
    MeasuredPoint::new(4.0, 51.55),
    MeasuredPoint::new(3.88, 57.47),
    MeasuredPoint::new(3.27, 87.9),
    MeasuredPoint::new(3.25, 95.79),
    MeasuredPoint::new(3.22, 106.27),
    MeasuredPoint::new(3.2, 109.05),
    MeasuredPoint::new(3.18, 117.51),
    MeasuredPoint::new(3.16, 120.63),
    MeasuredPoint::new(3.14, 123.0),
    MeasuredPoint::new(3.12, 129.03),
    MeasuredPoint::new(3.1, 150.83),
    MeasuredPoint::new(3.08, 172.71),
    MeasuredPoint::new(3.07, 188.68),
    MeasuredPoint::new(3.05, 198.81),
    MeasuredPoint::new(3.03, 211.42),
    MeasuredPoint::new(3.01, 221.24),
    MeasuredPoint::new(2.99, 225.23),
    MeasuredPoint::new(2.97, 226.24),
    MeasuredPoint::new(2.96, 220.26),
    MeasuredPoint::new(2.94, 210.97),
    MeasuredPoint::new(2.92, 209.21),
    MeasuredPoint::new(2.9, 207.47),
    MeasuredPoint::new(2.89, 202.02),
    MeasuredPoint::new(2.87, 198.41),
    MeasuredPoint::new(2.85, 188.68),
    MeasuredPoint::new(2.84, 172.41),
    MeasuredPoint::new(2.82, 157.48),
    MeasuredPoint::new(2.81, 143.68),
    MeasuredPoint::new(2.79, 133.16),
    MeasuredPoint::new(2.77, 120.48),
    MeasuredPoint::new(2.76, 108.46),
    MeasuredPoint::new(2.74, 103.2),
    MeasuredPoint::new(2.73, 103.95),
    MeasuredPoint::new(2.71, 104.49),
    MeasuredPoint::new(2.7, 102.15),
    MeasuredPoint::new(2.68, 99.5),
    MeasuredPoint::new(2.67, 98.91),
    MeasuredPoint::new(2.66, 98.04),
    MeasuredPoint::new(2.64, 94.34),
    MeasuredPoint::new(2.63, 91.74),
    MeasuredPoint::new(2.61, 87.72),
    MeasuredPoint::new(2.6, 82.64),
    MeasuredPoint::new(2.59, 78.74),
    MeasuredPoint::new(2.57, 76.34),
    MeasuredPoint::new(2.56, 73.53),
    MeasuredPoint::new(2.55, 69.44),
    MeasuredPoint::new(2.53, 66.67),
    MeasuredPoint::new(2.52, 61.73),
    MeasuredPoint::new(2.51, 57.8),
    MeasuredPoint::new(2.5, 52.36),
    MeasuredPoint::new(2.48, 49.02),
    MeasuredPoint::new(2.47, 43.86),
    MeasuredPoint::new(2.46, 39.06),
    MeasuredPoint::new(2.45, 35.71),
    MeasuredPoint::new(2.43, 30.77),
    MeasuredPoint::new(2.42, 26.88),
    MeasuredPoint::new(2.41, 25.25),
    MeasuredPoint::new(2.4, 25.06),
    MeasuredPoint::new(2.39, 24.45),
    MeasuredPoint::new(2.38, 24.04),
    MeasuredPoint::new(2.36, 23.98),
    MeasuredPoint::new(2.35, 23.36),
    MeasuredPoint::new(2.34, 23.04),
    MeasuredPoint::new(2.33, 22.37),
    MeasuredPoint::new(2.32, 22.12),
    MeasuredPoint::new(2.31, 21.46),
    MeasuredPoint::new(2.3, 21.1),
    MeasuredPoint::new(2.29, 20.45),
    MeasuredPoint::new(2.28, 19.57),
    MeasuredPoint::new(2.27, 18.62),
    MeasuredPoint::new(2.26, 17.7),
    MeasuredPoint::new(2.25, 16.86),
    MeasuredPoint::new(2.24, 16.78),
    MeasuredPoint::new(2.23, 16.5),
    MeasuredPoint::new(2.22, 16.16),
    MeasuredPoint::new(2.21, 15.63),
    MeasuredPoint::new(2.2, 15.58),
    MeasuredPoint::new(2.19, 14.88),
    MeasuredPoint::new(2.18, 14.39),
    MeasuredPoint::new(2.17, 13.64),
    MeasuredPoint::new(2.16, 12.95),
    MeasuredPoint::new(2.15, 11.96),
    MeasuredPoint::new(2.14, 11.16),
    MeasuredPoint::new(2.13, 10.11),
    MeasuredPoint::new(2.12, 9.09),
    MeasuredPoint::new(2.11, 8.2),
    MeasuredPoint::new(2.1, 7.4),
    MeasuredPoint::new(2.1, 6.6),
    MeasuredPoint::new(2.09, 5.98),
    MeasuredPoint::new(2.08, 5.19),
    MeasuredPoint::new(2.07, 4.5),
    MeasuredPoint::new(2.06, 4.05),
    MeasuredPoint::new(2.05, 3.88),
    MeasuredPoint::new(2.04, 3.8),
    MeasuredPoint::new(2.04, 3.78),
    MeasuredPoint::new(2.03, 3.75),
    MeasuredPoint::new(2.02, 3.73),
    MeasuredPoint::new(2.01, 3.69),
    MeasuredPoint::new(2.0, 3.63),
    MeasuredPoint::new(1.99, 3.56),
    MeasuredPoint::new(1.99, 3.53),
    MeasuredPoint::new(1.98, 3.44),
    MeasuredPoint::new(1.97, 3.43),
    MeasuredPoint::new(1.96, 3.34),
    MeasuredPoint::new(1.96, 3.32),
    MeasuredPoint::new(1.95, 3.25),
    MeasuredPoint::new(1.94, 3.22),
    MeasuredPoint::new(1.93, 3.11),
    MeasuredPoint::new(1.92, 3.08),
    MeasuredPoint::new(1.92, 2.99),
    MeasuredPoint::new(1.91, 2.94),
    MeasuredPoint::new(1.9, 2.79),
    MeasuredPoint::new(1.9, 2.7),
    MeasuredPoint::new(1.89, 2.54),
    MeasuredPoint::new(1.88, 2.44),
    MeasuredPoint::new(1.87, 2.36),
    MeasuredPoint::new(1.87, 2.33),
    MeasuredPoint::new(1.86, 2.29),
    MeasuredPoint::new(1.85, 2.28),
    MeasuredPoint::new(1.85, 2.23),
    MeasuredPoint::new(1.84, 2.23),
    MeasuredPoint::new(1.83, 2.17),
    MeasuredPoint::new(1.83, 2.15),
    MeasuredPoint::new(1.82, 2.09),
    MeasuredPoint::new(1.81, 2.06),
    MeasuredPoint::new(1.81, 1.99),
    MeasuredPoint::new(1.8, 1.94),
    MeasuredPoint::new(1.79, 1.86),
    MeasuredPoint::new(1.79, 1.79),
    MeasuredPoint::new(1.78, 1.69),
    MeasuredPoint::new(1.77, 1.6),
    MeasuredPoint::new(1.77, 1.51),
    MeasuredPoint::new(1.76, 1.42),
    MeasuredPoint::new(1.75, 1.32),
    MeasuredPoint::new(1.75, 1.21),
    MeasuredPoint::new(1.74, 1.09),
    MeasuredPoint::new(1.74, 0.99),
    MeasuredPoint::new(1.73, 0.89),
    MeasuredPoint::new(1.72, 0.81),
    MeasuredPoint::new(1.72, 0.74),
    MeasuredPoint::new(1.71, 0.67),
    MeasuredPoint::new(1.71, 0.6),
    MeasuredPoint::new(1.705396, 0.672495),
    MeasuredPoint::new(1.700724, 0.6168651),
    MeasuredPoint::new(1.696077, 0.5595345),
    MeasuredPoint::new(1.691456, 0.5020836),
    MeasuredPoint::new(1.686859, 0.4530217),
    MeasuredPoint::new(1.682288, 0.4176761),
    MeasuredPoint::new(1.677741, 0.3949603),
    MeasuredPoint::new(1.673219, 0.3812283),
    MeasuredPoint::new(1.668721, 0.3742095),
    MeasuredPoint::new(1.664247, 0.3700825),
    MeasuredPoint::new(1.659798, 0.3674309),
    MeasuredPoint::new(1.655371, 0.3658447),
    MeasuredPoint::new(1.650969, 0.3647904),
    MeasuredPoint::new(1.64659, 0.3639275),
    MeasuredPoint::new(1.642234, 0.3630818),
    MeasuredPoint::new(1.6379, 0.3619516),
    MeasuredPoint::new(1.63359, 0.3608805),
    MeasuredPoint::new(1.629303, 0.3605813),
    MeasuredPoint::new(1.625037, 0.3604643),
    MeasuredPoint::new(1.620794, 0.3609978),
    MeasuredPoint::new(1.616574, 0.3621876),
    MeasuredPoint::new(1.612375, 0.3630818),
    MeasuredPoint::new(1.608198, 0.3638745),
    MeasuredPoint::new(1.604042, 0.3662333),
    MeasuredPoint::new(1.599908, 0.3690445),
    MeasuredPoint::new(1.595795, 0.3718025),
    MeasuredPoint::new(1.591703, 0.3760812),
    MeasuredPoint::new(1.587632, 0.3797661),
    MeasuredPoint::new(1.583582, 0.3837004),
    MeasuredPoint::new(1.579553, 0.3890748),
    MeasuredPoint::new(1.575544, 0.3947109),
    MeasuredPoint::new(1.571555, 0.4012197),
    MeasuredPoint::new(1.567587, 0.40848),
    MeasuredPoint::new(1.563638, 0.4152307),
    MeasuredPoint::new(1.559709, 0.4211945),
    MeasuredPoint::new(1.5558, 0.4285959),
    MeasuredPoint::new(1.551911, 0.4360719),
];

pub(super) fn leigh_water_points() -> &'static [MeasuredPoint] {
    &LEIGH_WATER_POINTS
}
