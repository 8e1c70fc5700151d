//! Display-ready creature summaries

use typedex_matchup::AttackType;

use crate::error::FetchError;
use crate::model::PokemonResponse;
use crate::name::to_display_name;

/// Sprite shown when the API has no image for a pokemon
pub const POKEBALL_SPRITE: &str =
    "https://github.com/PokeAPI/sprites/blob/master/sprites/items/poke-ball.png?raw=true";

/// What a display layer needs to show a pokemon
#[derive(Debug, Clone, PartialEq)]
pub struct CreatureSummary {
    /// National dex number
    pub id: u32,
    /// API name (e.g. `nidoran-f`)
    pub name: String,
    /// Name for display (e.g. `Nidoran♀`)
    pub display_name: String,
    pub types: Vec<AttackType>,
    pub height_m: f32,
    pub weight_kg: f32,
    pub front_sprite: String,
    pub back_sprite: String,
}

impl CreatureSummary {
    pub fn from_response(response: &PokemonResponse) -> Result<Self, FetchError> {
        let sprite = |url: &Option<String>| {
            url.clone()
                .unwrap_or_else(|| POKEBALL_SPRITE.to_string())
        };

        Ok(Self {
            id: response.id,
            name: response.name.clone(),
            display_name: to_display_name(&response.name),
            types: response.defending_types()?,
            height_m: response.height as f32 / 10.0,
            weight_kg: response.weight as f32 / 10.0,
            front_sprite: sprite(&response.sprites.front_default),
            back_sprite: sprite(&response.sprites.back_default),
        })
    }

    /// Dex number formatted as on a pokedex entry
    pub fn dex_label(&self) -> String {
        format!("No. {}", self.id)
    }
}
