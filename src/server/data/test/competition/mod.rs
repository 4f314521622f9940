use crate::server::{
    data::competition::CompetitionRepository,
    model::{
        competition::{CompetitionChanges, CompetitionFilter, CompetitionOrderField},
        list::{OrderBy, PageRequest},
    },
};
use chrono::{TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
