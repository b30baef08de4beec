mod checkin_vm;
pub mod motion;

pub use checkin_vm::{
    BACK_LABEL, BEGIN_LABEL, CardBody, CardVm, CheckInIntent, CheckInVm, ChipVm, FooterVm,
    InputVm, NEXT_LABEL, TEXT_PLACEHOLDER, WELCOME_MESSAGE, WELCOME_TITLE, map_card,
};
pub use motion::{CardPhase, CardPresence, MotionMode, PresenceChange, RevealSlot};
