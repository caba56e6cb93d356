pub mod firebase_client;

pub use firebase_client::FirebaseIdentityProvider;
