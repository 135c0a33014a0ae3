//! Name-shape conversion between host-style CamelCase identifiers and
//! logic-style snake_case functors.
//!
//! Used to default a logic-side functor from a host class name when a
//! class declaration does not name one explicitly.

/// Convert a CamelCase host name to a snake_case functor name.
///
/// Acronym runs keep a single underscore at their boundary:
/// `XMLFastTranslator` becomes `xml_fast_translator`.
pub fn camel_to_functor(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars
                .get(i + 1)
                .map(|n| n.is_ascii_lowercase())
                .unwrap_or(false);
            if prev != '_' && (!prev.is_ascii_uppercase() || next_is_lower) {
                out.push('_');
            }
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

/// Convert a snake_case functor name to a camelCase host name:
/// `fast_translator` becomes `fastTranslator`.
pub fn functor_to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert a snake_case functor name to a CamelCase host class name:
/// `fast_translator` becomes `FastTranslator`.
pub fn functor_to_class(name: &str) -> String {
    let camel = functor_to_camel(name);
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => camel,
    }
}

// ── Tests ──────────────────────────────────────────────────────────────
