//! Minimal matplotlib mathtext → Unicode conversion.
//!
//! The table labels use matplotlib markup such as `3$eV/\AA^2x^2$`. The
//! bitmap backend draws plain text, so math segments are rewritten into the
//! closest Unicode form: `\AA` becomes `Å`, single-character exponents become
//! superscript glyphs (`x²`), and groups without a superscript form fall
//! back to `^(...)`. Text outside `$...$` is left untouched.

/// Convert a label containing `$...$` segments to plain Unicode text.
pub fn to_unicode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut math = String::new();
    let mut in_math = false;

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'$') => {
                chars.next();
                if in_math {
                    math.push('$');
                } else {
                    out.push('$');
                }
            }
            '$' => {
                if in_math {
                    out.push_str(&convert_math(&math));
                    math.clear();
                }
                in_math = !in_math;
            }
            _ if in_math => math.push(c),
            _ => out.push(c),
        }
    }

    // An unterminated math segment is kept verbatim, like matplotlib does.
    if in_math {
        out.push('$');
        out.push_str(&math);
    }
    out
}

fn convert_math(src: &str) -> String {
    let mut out = String::new();
    let mut chars = src.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let mut name = String::new();
                while let Some(&n) = chars.peek() {
                    if !n.is_ascii_alphabetic() {
                        break;
                    }
                    name.push(n);
                    chars.next();
                }
                if name.is_empty() {
                    // Escaped symbol such as `\{` or `\|`.
                    if let Some(n) = chars.next() {
                        out.push(n);
                    }
                } else {
                    out.push_str(&command(&name));
                }
            }
            '^' | '_' => {
                let group = next_group(&mut chars);
                let converted = convert_math(&group);
                out.push_str(&script(c, &converted));
            }
            '{' | '}' => {}
            _ => out.push(c),
        }
    }
    out
}

/// The argument of `^`/`_`: a braced group, a command, or one character.
fn next_group(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    match chars.next() {
        Some('{') => {
            let mut depth = 1;
            let mut group = String::new();
            for c in chars.by_ref() {
                match c {
                    '{' => depth += 1,
                    '}' => {
                        depth -= 1;
                        if depth == 0 {
                            break;
                        }
                    }
                    _ => {}
                }
                group.push(c);
            }
            group
        }
        Some('\\') => {
            let mut group = String::from('\\');
            while let Some(&n) = chars.peek() {
                if !n.is_ascii_alphabetic() {
                    break;
                }
                group.push(n);
                chars.next();
            }
            group
        }
        Some(c) => c.to_string(),
        None => String::new(),
    }
}

fn command(name: &str) -> String {
    let sym = match name {
        "AA" => "Å",
        "psi" => "ψ",
        "Psi" => "Ψ",
        "hbar" => "ħ",
        "cdot" => "·",
        "times" => "×",
        "pm" => "±",
        "infty" => "∞",
        "alpha" => "α",
        "beta" => "β",
        "omega" => "ω",
        "pi" => "π",
        _ => return format!("\\{name}"),
    };
    sym.to_string()
}

fn script(kind: char, group: &str) -> String {
    let map = if kind == '^' { superscript } else { subscript };
    if group.chars().count() == 1 {
        if let Some(s) = group.chars().next().and_then(map) {
            return s.to_string();
        }
    }
    format!("{kind}({group})")
}

fn superscript(c: char) -> Option<char> {
    Some(match c {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '+' => '⁺',
        '-' => '⁻',
        'n' => 'ⁿ',
        _ => return None,
    })
}

fn subscript(c: char) -> Option<char> {
    Some(match c {
        '0' => '₀',
        '1' => '₁',
        '2' => '₂',
        '3' => '₃',
        '4' => '₄',
        '5' => '₅',
        '6' => '₆',
        '7' => '₇',
        '8' => '₈',
        '9' => '₉',
        '+' => '₊',
        '-' => '₋',
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_table_potentials() {
        assert_eq!(to_unicode(r"3$eV/\AA^2x^2$"), "3eV/Å²x²");
        assert_eq!(to_unicode(r"1$eV/\AA|x|$"), "1eV/Å|x|");
        assert_eq!(to_unicode(r"5$eV/\AA^3|x|^3$"), "5eV/Å³|x|³");
        assert_eq!(to_unicode(r"5$eV/\AA^4x^4$"), "5eV/Å⁴x⁴");
    }

    #[test]
    fn converts_axis_labels() {
        assert_eq!(to_unicode(r"x ($\AA$)"), "x (Å)");
        assert_eq!(to_unicode(r"ψ ($\AA^{-1/2}$)"), "ψ (Å^(-1/2))");
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(to_unicode("3.380695eV"), "3.380695eV");
        assert_eq!(to_unicode(r"a \AA outside math"), r"a \AA outside math");
        assert_eq!(to_unicode(r"costs \$5"), "costs $5");
    }

    #[test]
    fn keeps_unterminated_math() {
        assert_eq!(to_unicode(r"E=$x^2"), r"E=$x^2");
    }

    #[test]
    fn handles_subscripts_and_unknown_commands() {
        assert_eq!(to_unicode(r"$E_0$"), "E₀");
        assert_eq!(to_unicode(r"$E_{ab}$"), "E_(ab)");
        assert_eq!(to_unicode(r"$\foo$"), r"\foo");
        assert_eq!(to_unicode(r"$\hbar\omega$"), "ħω");
    }
}
