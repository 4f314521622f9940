use crate::server::{
    data::drone_category::DroneCategoryRepository,
    model::{
        drone_category::{DroneCategoryFilter, DroneCategoryOrderField},
        list::{OrderBy, PageRequest},
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
