//! Dashboard session state.
//!
//! The city selection, favourites and comparison toggle the dashboard works
//! with. Built from configuration and passed explicitly to handlers.

use aqi_domain::City;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardState {
    pub selected_city: City,
    pub favorites: Vec<City>,
    pub compare_mode: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        let favorites = ["Delhi", "Mumbai"]
            .iter()
            .filter_map(|name| City::find(name))
            .collect();
        Self {
            selected_city: City::default_city(),
            favorites,
            compare_mode: false,
        }
    }
}

impl DashboardState {
    pub fn new(selected_city: City, favorites: Vec<City>) -> Self {
        let mut state = Self {
            selected_city,
            favorites: Vec::with_capacity(favorites.len()),
            compare_mode: false,
        };
        for city in favorites {
            state.add_favorite(city);
        }
        state
    }

    pub fn select(&mut self, city: City) {
        self.selected_city = city;
    }

    /// Add a favourite. Adding one that is already present is a no-op.
    pub fn add_favorite(&mut self, city: City) {
        if !self.is_favorite(&city) {
            self.favorites.push(city);
        }
    }

    /// Remove a favourite, returning whether it was present.
    pub fn remove_favorite(&mut self, city: &City) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|c| c != city);
        self.favorites.len() != before
    }

    pub fn is_favorite(&self, city: &City) -> bool {
        self.favorites.contains(city)
    }

    pub fn toggle_compare_mode(&mut self) -> bool {
        self.compare_mode = !self.compare_mode;
        self.compare_mode
    }
}
