use crate::server::{
    data::pilot::PilotRepository,
    model::{
        list::{OrderBy, PageRequest},
        pilot::{Gender, PilotChanges, PilotFilter, PilotOrderField},
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod get_paginated;
