pub mod invite_store;
