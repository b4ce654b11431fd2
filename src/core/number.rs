// Shared numeric conversion helpers for rendering

/// ECMAScript-style ToString for Number values.
///
/// Decimal notation inside `[1e-6, 1e21)`, exponential `m.mmme±NN` outside,
/// shortest round-trip digits in both forms. Both zeros render `"0"`; the
/// inspector layer is responsible for the `-0` override.
pub fn format_js_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n.is_sign_negative() {
            "-Infinity".to_string()
        } else {
            "Infinity".to_string()
        };
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let abs = n.abs();
    if !(1e-6..1e21).contains(&abs) {
        // `{:e}` already yields the shortest mantissa; JS spells the
        // exponent with an explicit sign.
        let s = format!("{:e}", n);
        if let Some((mant, exp)) = s.split_once('e')
            && let Ok(exp_int) = exp.parse::<i32>()
        {
            return format!("{}e{:+}", mant, exp_int);
        }
        return s;
    }

    format!("{}", n)
}
