use crate::core::Event;
use crate::gui::screens::input_form::FormMessage;
use crate::view::Section;

#[derive(Debug, Clone)]
pub enum Message {
    /// Anything the controller understands: user actions, call results, ticks.
    Core(Event),
    Form(FormMessage),
    SubmitForm,
    ToggleSection(Section),
}
