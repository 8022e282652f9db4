pub mod administrador_repository;
pub mod categoria_repository;
pub mod cliente_repository;
pub mod locacao_repository;
pub mod reserva_repository;
pub mod veiculo_repository;
