pub mod locacao;
pub mod reserva;
pub mod shared;
pub mod veiculo;
