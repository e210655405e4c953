//! Rendering of solved scale factors as WCSim `tuning_parameters.mac` lines.

use crate::domain::{Effect, ScaleFactors, ScaleQuery};

pub const ABSORPTION_COMMAND: &str = "/WCSim/tuning/abwff";
pub const RAYLEIGH_COMMAND: &str = "/WCSim/tuning/rayff";
pub const MIE_COMMAND: &str = "/WCSim/tuning/mieff";

/// Significant digits used for the macro values.
pub const MACRO_SIGNIFICANT_DIGITS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Only the macro commands.
    Minimal,
    #[default]
    Verbose,
}

impl Verbosity {
    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Minimal),
            2 => Some(Self::Verbose),
            _ => None,
        }
    }
}

/// Formats `value` the way C's `%.<significant>g` does.
pub fn format_general(value: f64, significant: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let precision = significant.max(1);
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn strip_trailing_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

pub const fn tuning_command(effect: Effect) -> &'static str {
    match effect {
        Effect::Absorption => ABSORPTION_COMMAND,
        Effect::Rayleigh => RAYLEIGH_COMMAND,
        Effect::Mie => MIE_COMMAND,
    }
}

/// The three `/WCSim/tuning/*ff` lines. A disabled Mie is written as `0`.
pub fn tuning_macro_lines(factors: &ScaleFactors) -> [String; 3] {
    Effect::ALL.map(|effect| {
        let value = factors.factor(effect).unwrap_or(0.0);
        format!(
            "{} {}",
            tuning_command(effect),
            format_general(value, MACRO_SIGNIFICANT_DIGITS)
        )
    })
}

// Summary numbers always keep a fractional part or exponent, e.g. `40.0`.
pub fn summary_lines(query: &ScaleQuery, factors: &ScaleFactors) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Total attenuation length: {:?} m at {:?} nm wavelength",
            query.target_length_m, query.wavelength_nm
        ),
        format!("Absorption scale factor: {:?}", factors.absorption),
        format!("Scattering scale factor: {:?}", factors.scattering),
    ];
    match factors.mie {
        Some(mie) => lines.push(format!("Mie scattering scale factor: {mie:?}")),
        None => lines.push("Mie scattering switched off (check WCSim code)".to_string()),
    }
    lines.push("WCSim tuning_parameters.mac output:".to_string());
    lines
}

pub fn render_report(query: &ScaleQuery, factors: &ScaleFactors, verbosity: Verbosity) -> String {
    let mut lines = match verbosity {
        Verbosity::Verbose => summary_lines(query, factors),
        Verbosity::Minimal => Vec::new(),
    };
    lines.extend(tuning_macro_lines(factors));

    let mut report = lines.join("\n");
    report.push('\n');
    report
}
