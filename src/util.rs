use std::net::Ipv6Addr;

/// Renders an IPv6 address as eight colon separated hex groups. Zero runs are not collapsed
/// and leading zeros of a group are dropped, e.g. `2001:db8:0:0:0:0:0:1`.
pub fn expanded_ipv6(addr: &Ipv6Addr) -> String {
    addr.segments()
        .iter()
        .map(|segment| format!("{segment:x}"))
        .collect::<Vec<_>>()
        .join(":")
}

/// Domain name in presentation form, i.e. with the trailing dot of the root label.
pub fn presentation_name(name: &str) -> String {
    if name.ends_with('.') {
        name.to_owned()
    } else {
        format!("{name}.")
    }
}

/// Quotes a <character-string> for presentation, escaping quotes and backslashes.
pub fn quote_character_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}
