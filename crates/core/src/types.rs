/// Movie ids are positive integers assigned by the store.
pub type MovieId = i64;
