pub mod auth_controller;
pub mod categoria_controller;
pub mod locacao_controller;
pub mod manutencao_controller;
pub mod reserva_controller;
pub mod veiculo_controller;
