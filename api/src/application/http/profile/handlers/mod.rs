pub mod delete_account;
pub mod get_profile;
pub mod register_push_token;
pub mod set_notification_frequency;
pub mod update_nickname;
