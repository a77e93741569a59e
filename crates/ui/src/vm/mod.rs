mod exam_card_vm;
mod review_vm;
mod time_fmt;

pub use exam_card_vm::{ExamCardVm, map_exam_cards};
pub use review_vm::{
    OptionRowVm, ResultsVm, ReviewItemVm, filter_label, map_review_items, outcome_label,
};
pub use time_fmt::{format_datetime, format_time_spent};
