//! Domain types shared by the ThyBot flows.
//!
//! * [`profile`] – the patient profile and the thyroid classifier.
//! * [`food`] – rows of the static nutrition table.
//! * [`style`] – the user's preferred response style.
//! * [`outputs`] – structured results produced from model replies.
//! * [`fragments`] – prompt fragments that turn the above into chat messages.
pub mod food;
pub mod fragments;
pub mod outputs;
pub mod profile;
pub mod style;
