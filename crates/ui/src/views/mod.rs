mod card;
mod checkin;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use card::CheckInCard;
pub use checkin::CheckInView;
