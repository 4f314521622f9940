mod competition;
mod drone;
mod drone_category;
mod pilot;
mod token;
mod toy;
mod user;
