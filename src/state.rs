use std::sync::Arc;

use crate::{
    client::MovieClient,
    services::{MovieService, UserService},
    store::{CartStore, UserStore},
};

#[derive(Clone)]
pub struct AppState {
    pub movies: MovieService,
    pub users: UserService,
}

impl AppState {
    pub fn new(
        client: Arc<dyn MovieClient>,
        cart: Arc<dyn CartStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            movies: MovieService::new(client, cart),
            users: UserService::new(users),
        }
    }
}
