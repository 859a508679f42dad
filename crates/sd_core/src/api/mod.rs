pub mod draft_json;
pub mod roster_json;

pub use draft_json::{draft_teams_json, DraftRequest, DraftResponse};
pub use roster_json::{load_roster_json, RosterRequest, RosterResponse};
