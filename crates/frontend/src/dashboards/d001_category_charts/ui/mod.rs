pub mod chart_card;
pub mod dashboard;
