mod persistence;
mod quick;
mod registry;
mod traits;
