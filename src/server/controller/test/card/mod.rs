use super::*;

mod create;
mod scenario;

fn card_uri(id: impl std::fmt::Display) -> String {
    format!("/api/v1/cards/{}", id)
}
