pub mod cors;
pub mod sessao;
