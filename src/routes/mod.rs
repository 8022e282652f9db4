pub mod auth_routes;
pub mod categoria_routes;
pub mod locacao_routes;
pub mod manutencao_routes;
pub mod reserva_routes;
pub mod veiculo_routes;
