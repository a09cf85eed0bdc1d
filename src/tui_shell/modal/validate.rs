use std::path::Path;

use super::TextInputAction;

pub(super) fn allow_empty_text_input(action: &TextInputAction) -> bool {
    matches!(
        action,
        TextInputAction::ProjectDescription
            | TextInputAction::ItemOwner(_)
            | TextInputAction::ItemNotes(_)
    )
}

pub(super) fn validate_text_input(action: &TextInputAction, value: &str) -> Result<(), String> {
    match action {
        TextInputAction::EvidencePath(_) => {
            if Path::new(value).is_file() {
                Ok(())
            } else {
                Err(format!("not a file: {}", value))
            }
        }
        _ => Ok(()),
    }
}
