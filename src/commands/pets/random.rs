//! Handles `/randompet`: suggests a pet the user has not logged yet.

use crate::catalog::{Catalog, CatalogPet};
use crate::commands::{BotCommand, Invocation, Reply, registered_name};
use crate::database;
use crate::error::CommandError;
use crate::model::AppState;
use async_trait::async_trait;
use rand::Rng;
use rand::seq::IndexedRandom;
use serenity::builder::CreateCommand;
use std::collections::BTreeSet;

pub const ALL_OBTAINED: &str =
    "You've already gotten all pets. There's nothing more for you to do.";

/// Uniform pick among catalog pets not in `obtained`.
pub fn pick_unobtained<'a, R: Rng + ?Sized>(
    pets: &'a Catalog<CatalogPet>,
    obtained: &BTreeSet<i64>,
    rng: &mut R,
) -> Option<&'a CatalogPet> {
    let remaining: Vec<&CatalogPet> = pets
        .all()
        .iter()
        .filter(|pet| !obtained.contains(&pet.id))
        .collect();
    remaining.choose(rng).copied()
}

pub struct RandomPet;

#[async_trait]
impl BotCommand for RandomPet {
    fn name(&self) -> &'static str {
        "randompet"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description("Gives you a random pet to hunt for (filters out obtained pets)")
    }

    async fn execute(
        &self,
        state: &AppState,
        invocation: &Invocation,
    ) -> Result<Reply, CommandError> {
        let obtained =
            database::obtained::list_obtained_pets(&state.db, invocation.user_id).await?;
        let pet = pick_unobtained(&state.catalogs.pets, &obtained, &mut rand::rng());
        let Some(pet) = pet else {
            return Ok(Reply::public(ALL_OBTAINED));
        };
        let details = format!(
            "{}. It has a {} drop rate from {}.",
            pet.name, pet.drop_rate, pet.activity
        );
        let content = match registered_name(state, invocation.user_id).await? {
            Some(osrs_name) => format!("`{osrs_name}`, hunt {details}"),
            None => format!("Hunt {details}"),
        };
        Ok(Reply::public(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pet(id: i64, name: &str) -> CatalogPet {
        CatalogPet {
            id,
            name: name.to_string(),
            activity: "Somewhere".to_string(),
            drop_rate: "1/1".to_string(),
            release_date: "2015-01-01".to_string(),
        }
    }

    #[test]
    fn never_suggests_an_obtained_pet() {
        let pets = Catalog::from_entries([pet(1, "Baby Mole"), pet(2, "Prince")]);
        let obtained = BTreeSet::from([1]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let picked = pick_unobtained(&pets, &obtained, &mut rng).unwrap();
            assert_eq!(picked.name, "Prince");
        }
    }

    #[test]
    fn nothing_left_yields_none() {
        let pets = Catalog::from_entries([pet(1, "Baby Mole")]);
        let obtained = BTreeSet::from([1, 5]);
        assert!(pick_unobtained(&pets, &obtained, &mut StdRng::seed_from_u64(1)).is_none());
    }
}
