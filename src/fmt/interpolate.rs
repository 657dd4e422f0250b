//! printf-style substitution: `%s`, `%d`, `%5.2f`, `%(name)s`, `%%`.
//!
//! Messages use the positional form against a record's arguments; literal
//! pattern formatters use the mapping form against record attributes. A
//! message with no arguments is never scanned, so a bare `%` in text is safe.

use crate::record::Arg;
use regex::{Captures, Regex};
use std::fmt;
use std::sync::LazyLock;

static CONVERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%(?:\((?P<key>[^)]*)\))?(?P<flags>[-#0 +]*)(?P<width>\d+)?(?:\.(?P<precision>\d+))?(?P<conv>.?)")
        .expect("Invalid conversion regex")
});

/// Largest width or precision accepted; `format!` can't pad past `u16::MAX`.
pub const MAX_FIELD: usize = 10_000;

/// Why a message couldn't be interpolated. Callers render the literal message instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpolationError {
    /// Placeholder at this index has no argument.
    MissingArgument(usize),
    /// More arguments than placeholders.
    UnusedArguments { used: usize, supplied: usize },
    /// Argument can't be rendered by the conversion (`%d` with a string).
    TypeMismatch { conversion: char, argument: String },
    /// `%q` and friends.
    UnknownConversion(char),
    /// Template ends right after `%`.
    Truncated,
    /// `%(name)s` where `name` isn't known.
    MissingKey(String),
    /// `%(name)s` in a positional message, or `%s` in a mapping pattern.
    MixedStyles,
    /// Width or precision above [`MAX_FIELD`].
    FieldTooLarge(String),
}

impl fmt::Display for InterpolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArgument(index) => write!(f, "not enough arguments (placeholder {index})"),
            Self::UnusedArguments { used, supplied } => {
                write!(f, "{supplied} arguments supplied, {used} used")
            }
            Self::TypeMismatch {
                conversion,
                argument,
            } => write!(f, "%{conversion} can't format {argument:?}"),
            Self::UnknownConversion(c) => write!(f, "unsupported conversion '%{c}'"),
            Self::Truncated => write!(f, "incomplete format"),
            Self::MissingKey(key) => write!(f, "unknown key '{key}'"),
            Self::MixedStyles => write!(f, "mixed positional and mapping placeholders"),
            Self::FieldTooLarge(raw) => write!(f, "width or precision {raw} exceeds {MAX_FIELD}"),
        }
    }
}

impl std::error::Error for InterpolationError {}

#[derive(Debug, Clone, Copy, Default)]
struct Flags {
    left: bool,
    zero: bool,
    plus: bool,
    space: bool,
    alternate: bool,
}

/// One parsed `%...` conversion.
#[derive(Debug, Clone)]
struct Spec<'t> {
    key: Option<&'t str>,
    flags: Flags,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: char,
}

impl<'t> Spec<'t> {
    fn from_captures(caps: &Captures<'t>) -> Result<Self, InterpolationError> {
        let conversion = caps
            .name("conv")
            .and_then(|m| m.as_str().chars().next())
            .ok_or(InterpolationError::Truncated)?;

        let mut flags = Flags::default();
        for c in caps.name("flags").map_or("", |m| m.as_str()).chars() {
            match c {
                '-' => flags.left = true,
                '0' => flags.zero = true,
                '+' => flags.plus = true,
                ' ' => flags.space = true,
                _ => flags.alternate = true,
            }
        }

        Ok(Self {
            key: caps.name("key").map(|m| m.as_str()),
            flags,
            width: field(caps, "width")?,
            precision: field(caps, "precision")?,
            conversion,
        })
    }
}

fn field(caps: &Captures<'_>, name: &str) -> Result<Option<usize>, InterpolationError> {
    let Some(m) = caps.name(name) else {
        return Ok(None);
    };
    m.as_str()
        .parse::<usize>()
        .ok()
        .filter(|value| *value <= MAX_FIELD)
        .map(Some)
        .ok_or_else(|| InterpolationError::FieldTooLarge(m.as_str().to_string()))
}

/// Applies `args` to `template`.
///
/// # Errors
/// Any placeholder/argument mismatch.
pub fn positional(template: &str, args: &[Arg]) -> Result<String, InterpolationError> {
    let mut next = 0;
    let out = scan(template, |spec, out| {
        if spec.key.is_some() {
            return Err(InterpolationError::MixedStyles);
        }
        let arg = args
            .get(next)
            .ok_or(InterpolationError::MissingArgument(next))?;
        next += 1;
        out.push_str(&convert(spec, arg)?);
        Ok(())
    })?;

    if next < args.len() {
        return Err(InterpolationError::UnusedArguments {
            used: next,
            supplied: args.len(),
        });
    }
    Ok(out)
}

/// Record-message entry point: no arguments means no scanning, and any
/// mismatch degrades to the literal template.
#[must_use]
pub fn positional_or_literal(template: &str, args: &[Arg]) -> String {
    if args.is_empty() {
        return template.to_string();
    }
    positional(template, args).unwrap_or_else(|_| template.to_string())
}

/// Applies `%(key)s` placeholders using `lookup`.
///
/// # Errors
/// Unknown keys, positional placeholders, or conversion mismatches.
pub fn mapping(
    template: &str,
    lookup: impl Fn(&str) -> Option<Arg>,
) -> Result<String, InterpolationError> {
    scan(template, |spec, out| {
        let key = spec.key.ok_or(InterpolationError::MixedStyles)?;
        let value = lookup(key).ok_or_else(|| InterpolationError::MissingKey(key.to_string()))?;
        out.push_str(&convert(spec, &value)?);
        Ok(())
    })
}

/// Keys referenced by `%(key)...` placeholders, in order of appearance.
#[must_use]
pub fn mapping_keys(template: &str) -> Vec<String> {
    CONVERSION_REGEX
        .captures_iter(template)
        .filter_map(|caps| caps.name("key").map(|m| m.as_str().to_string()))
        .collect()
}

fn scan<'t>(
    template: &'t str,
    mut emit: impl FnMut(&Spec<'t>, &mut String) -> Result<(), InterpolationError>,
) -> Result<String, InterpolationError> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for caps in CONVERSION_REGEX.captures_iter(template) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&template[last..whole.start()]);
        last = whole.end();

        let spec = Spec::from_captures(&caps)?;
        if spec.conversion == '%' {
            out.push('%');
            continue;
        }
        emit(&spec, &mut out)?;
    }

    out.push_str(&template[last..]);
    Ok(out)
}

fn mismatch(spec: &Spec<'_>, arg: &Arg) -> InterpolationError {
    InterpolationError::TypeMismatch {
        conversion: spec.conversion,
        argument: arg.to_display(),
    }
}

fn convert(spec: &Spec<'_>, arg: &Arg) -> Result<String, InterpolationError> {
    match spec.conversion {
        's' => Ok(pad_text(&truncate(&arg.to_display(), spec.precision), spec)),
        'r' | 'a' => Ok(pad_text(&truncate(&arg.to_repr(), spec.precision), spec)),
        'c' => {
            let c = match arg {
                Arg::Char(c) => Some(*c),
                Arg::Str(s) if s.chars().count() == 1 => s.chars().next(),
                other => other
                    .as_integer()
                    .and_then(|v| u32::try_from(v).ok())
                    .and_then(char::from_u32),
            };
            c.map(|c| pad_text(&c.to_string(), spec))
                .ok_or_else(|| mismatch(spec, arg))
        }
        'd' | 'i' | 'u' => {
            let v = arg.as_integer().ok_or_else(|| mismatch(spec, arg))?;
            Ok(pad_number(v < 0, v.unsigned_abs().to_string(), spec))
        }
        'x' | 'X' | 'o' => {
            let v = arg.as_integer().ok_or_else(|| mismatch(spec, arg))?;
            let magnitude = v.unsigned_abs();
            let body = match spec.conversion {
                'x' if spec.flags.alternate => format!("0x{magnitude:x}"),
                'x' => format!("{magnitude:x}"),
                'X' if spec.flags.alternate => format!("0X{magnitude:X}"),
                'X' => format!("{magnitude:X}"),
                _ if spec.flags.alternate => format!("0o{magnitude:o}"),
                _ => format!("{magnitude:o}"),
            };
            Ok(pad_number(v < 0, body, spec))
        }
        'f' | 'F' | 'e' | 'E' | 'g' | 'G' => {
            let v = arg.as_float().ok_or_else(|| mismatch(spec, arg))?;
            let upper = spec.conversion.is_ascii_uppercase();
            let body = if v.is_nan() {
                "nan".to_string()
            } else if v.is_infinite() {
                "inf".to_string()
            } else {
                let magnitude = v.abs();
                match spec.conversion.to_ascii_lowercase() {
                    'f' => {
                        let precision = spec.precision.unwrap_or(6);
                        format!("{magnitude:.precision$}")
                    }
                    'e' => scientific(magnitude, spec.precision.unwrap_or(6)),
                    _ => general(magnitude, spec.precision.unwrap_or(6), spec.flags.alternate),
                }
            };
            let body = if upper { body.to_uppercase() } else { body };
            Ok(pad_number(v.is_sign_negative() && !v.is_nan(), body, spec))
        }
        other => Err(InterpolationError::UnknownConversion(other)),
    }
}

fn truncate(text: &str, precision: Option<usize>) -> String {
    precision.map_or_else(
        || text.to_string(),
        |p| text.chars().take(p).collect(),
    )
}

fn pad_text(text: &str, spec: &Spec<'_>) -> String {
    let width = spec.width.unwrap_or(0);
    if spec.flags.left {
        format!("{text:<width$}")
    } else {
        format!("{text:>width$}")
    }
}

fn pad_number(negative: bool, body: String, spec: &Spec<'_>) -> String {
    let sign = if negative {
        "-"
    } else if spec.flags.plus {
        "+"
    } else if spec.flags.space {
        " "
    } else {
        ""
    };

    let width = spec.width.unwrap_or(0);
    let len = sign.len() + body.chars().count();
    if len >= width {
        return format!("{sign}{body}");
    }

    let fill = width - len;
    if spec.flags.left {
        format!("{sign}{body}{}", " ".repeat(fill))
    } else if spec.flags.zero {
        format!("{sign}{}{body}", "0".repeat(fill))
    } else {
        format!("{}{sign}{body}", " ".repeat(fill))
    }
}

/// `1.5e3` → `1.500000e+03`: sign and at least two exponent digits.
fn scientific(magnitude: f64, precision: usize) -> String {
    let raw = format!("{magnitude:.precision$e}");
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

/// `%g`: scientific for very small or large exponents, fixed otherwise, trailing zeros trimmed.
fn general(magnitude: f64, precision: usize, alternate: bool) -> String {
    let precision = precision.max(1);
    if magnitude == 0.0 {
        let digits = precision - 1;
        return if alternate {
            format!("{:.digits$}", 0.0)
        } else {
            "0".to_string()
        };
    }

    let digits = precision - 1;
    let probe = format!("{magnitude:.digits$e}");
    let exponent: i64 = probe
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0);

    #[allow(clippy::cast_possible_wrap)]
    let use_scientific = exponent < -4 || exponent >= precision as i64;
    if use_scientific {
        let formatted = scientific(magnitude, precision - 1);
        if alternate {
            return formatted;
        }
        let (mantissa, exp) = formatted.split_once('e').unwrap_or((formatted.as_str(), ""));
        format!("{}e{exp}", trim_fraction(mantissa))
    } else {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
        let decimals = (precision as i64 - 1 - exponent).max(0) as usize;
        let fixed = format!("{magnitude:.decimals$}");
        if alternate {
            fixed
        } else {
            trim_fraction(&fixed).to_string()
        }
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
