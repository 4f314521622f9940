use crate::server::{
    data::drone::DroneRepository,
    model::{
        drone::{DroneChanges, DroneFilter, DroneOrderField},
        list::{OrderBy, PageRequest},
    },
};
use chrono::{TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_owner_ids;
mod get_paginated;
mod update;
