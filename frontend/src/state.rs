use common::model::Sensor;
use yew::Callback;

/// Currently selected sensor, shared by the list and detail views through a
/// `ContextProvider`. Single slot, last write wins: subscribers get the
/// current value on mount and re-render on every change.
#[derive(Clone, PartialEq)]
pub struct Selection {
    pub sensor: Option<Sensor>,
    pub on_select: Callback<Sensor>,
}
