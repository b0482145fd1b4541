pub mod alunos;
pub mod dialog;
pub mod styles;
