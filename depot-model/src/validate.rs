//! Entry-name validation for create and rename.

use crate::error::NameError;

pub const MAX_NAME_LEN: usize = 255;

/// Characters never allowed in an entry name.
pub const FORBIDDEN_CHARACTERS: [char; 22] = [
    '@', '#', '$', '%', '^', '*', '\u{8}', '\t', '{', '}', '|', '\\', ':', ';', '"', '\n', '\r',
    '<', '>', ',', '?', '/',
];

/// How strictly names are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NameRules {
    /// Also reject a forbidden character whose first occurrence is at
    /// position 0.
    ///
    /// The historical check only rejects a forbidden character found past
    /// the start of the name, so "/ab" passes while "a/b" does not. Off by
    /// default to preserve that behavior; see DESIGN.md.
    pub reject_leading: bool,
}

impl NameRules {
    pub fn strict() -> Self {
        Self {
            reject_leading: true,
        }
    }
}

/// Validate a candidate entry name, reporting the first violation found.
pub fn validate_name(name: &str, rules: NameRules) -> Result<(), NameError> {
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(NameError::TooLong { len });
    }
    if name == "." || name == ".." {
        return Err(NameError::Reserved(name.to_string()));
    }
    for &character in FORBIDDEN_CHARACTERS.iter() {
        if let Some(position) = name.chars().position(|c| c == character)
            && (position > 0 || rules.reject_leading)
        {
            return Err(NameError::ForbiddenCharacter {
                character,
                position,
            });
        }
    }
    Ok(())
}
