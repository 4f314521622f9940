use crate::server::data::token::TokenRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_identity;
mod replace;
