use common::validation::Field;

#[derive(Clone)]
pub enum Msg {
    Input(Field, String),
    Submit,
}
