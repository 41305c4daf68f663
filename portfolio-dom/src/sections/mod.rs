//! The page sections below the navbar.
//!
//! Every section receives its copy through props, so a language switch only
//! re-renders the text nodes whose content actually changed.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod projects;
pub mod skills;

/// The id of the profile `<img>` .
pub const PROFILE_IMAGE_ID: &str = "profile-image";

/// The id of the contact `<form>` .
pub const CONTACT_FORM_ID: &str = "contact-form";
