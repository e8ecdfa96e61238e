use common::form::policy::SubmissionResult;

#[derive(Clone)]
pub enum Msg {
    /// The user changed the value of the field with this id.
    Input { id: String, value: String },
    Submit,
    Settled(SubmissionResult),
}
