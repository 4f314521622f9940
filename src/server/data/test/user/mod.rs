use crate::server::{data::user::UserRepository, model::list::PageRequest};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_by_id;
mod get_paginated;
