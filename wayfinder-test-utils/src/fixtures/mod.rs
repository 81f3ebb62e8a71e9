//! Test fixture modules for database and HTTP mock creation.
//!
//! - `status` - character status records
//! - `token` - stored ESI access tokens
//! - `esi` - mock ESI location and ship endpoints

pub mod esi;
pub mod status;
pub mod token;

use crate::TestContext;

impl TestContext {
    pub fn status<'a>(&'a mut self) -> StatusFixtures<'a> {
        StatusFixtures { setup: self }
    }

    pub fn token<'a>(&'a mut self) -> TokenFixtures<'a> {
        TokenFixtures { setup: self }
    }

    pub fn esi<'a>(&'a mut self) -> EsiFixtures<'a> {
        EsiFixtures { setup: self }
    }
}

pub struct StatusFixtures<'a> {
    pub setup: &'a mut TestContext,
}

pub struct TokenFixtures<'a> {
    pub setup: &'a mut TestContext,
}

pub struct EsiFixtures<'a> {
    pub setup: &'a mut TestContext,
}
