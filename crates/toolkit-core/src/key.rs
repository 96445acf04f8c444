/// Prefix the host puts in front of every input's environment key.
pub const INPUT_PREFIX: &str = "INPUT_";

/// Environment key under which the host publishes the input called `name`.
///
/// Spaces become underscores and every character is mapped to its titlecase
/// form one codepoint at a time. Characters without a single-codepoint
/// mapping (e.g. `ß`) are kept as-is, so the mapping never changes the
/// number of characters in the name.
pub fn input_env_key(name: &str) -> String {
    let mut key = String::with_capacity(INPUT_PREFIX.len() + name.len());
    key.push_str(INPUT_PREFIX);
    key.extend(name.chars().map(|c| match c {
        ' ' => '_',
        c => title_codepoint(c),
    }));
    key
}

/// Simple (single-codepoint) titlecase mapping.
///
/// Titlecase equals uppercase except for the Latin digraphs, Georgian
/// Mkhedruli (titlecase is the letter itself) and the Greek iota-subscript
/// letters, whose full uppercase expands to two codepoints.
fn title_codepoint(c: char) -> char {
    match c {
        'Ǆ' | 'ǅ' | 'ǆ' => 'ǅ',
        'Ǉ' | 'ǈ' | 'ǉ' => 'ǈ',
        'Ǌ' | 'ǋ' | 'ǌ' => 'ǋ',
        'Ǳ' | 'ǲ' | 'ǳ' => 'ǲ',
        '\u{10D0}'..='\u{10FA}' | '\u{10FD}'..='\u{10FF}' => c,
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(c as u32 + 8).unwrap_or(c)
        }
        '\u{1FB3}' => '\u{1FBC}',
        '\u{1FC3}' => '\u{1FCC}',
        '\u{1FF3}' => '\u{1FFC}',
        c => {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            }
        }
    }
}
