//! Este modulo contiene la implementacion del envio de mensajes
//! frecuentes al logger
use logger::logger::Logger;
use std::io::Error;

/// Registra el arranque del servidor
///
/// # Parametros
/// * `logger`: estructura logger donde se envia el mensaje
/// * `direccion`: direccion en la que quedo escuchando
pub fn log_inicio_servidor(logger: &Logger, direccion: &str) {
    logger.info(&format!("Servidor escuchando en {direccion}"), "Servidor");
}

/// Registra un error al bindear el listener
pub fn log_bind_error(logger: &Logger, direccion: &str, e: &Error) {
    logger.error(&format!("Error al bindear {direccion}: {e}"), "Servidor");
}

/// Registra un error al aceptar una conexion entrante
pub fn log_error_accepting_connection(logger: &Logger, e: Error) {
    logger.error(&format!("Error accepting connection: {e}"), "Servidor");
}

/// Registra una conexion aceptada
///
/// # Parametros
/// * `ip`: direccion del cliente aceptado
/// * `logger`: estructura logger donde se envia el mensaje
pub fn log_connection_accepted(ip: &str, logger: &Logger) {
    logger.info(&format!("Conexion aceptada desde {ip}"), "Servidor");
}

/// Registra la cantidad de clientes activos
pub fn log_client_count(logger: &Logger, cantidad: usize) {
    logger.info(&format!("Clientes activos: {cantidad}"), "Servidor");
}

/// Registra el rechazo de una conexion por alcanzar el maximo de
/// clientes
pub fn log_max_clients_reached(ip: &str, logger: &Logger) {
    logger.warn(&format!("Conexion de {ip} rechazada: maximo de clientes"), "Servidor");
}

/// Registra un error al obtener la direccion del peer
pub fn log_peer_addr_error(logger: &Logger, e: &Error) {
    logger.error(&format!("Error obteniendo peer addr: {e}"), "Servidor");
}

/// Registra la desconexion de un cliente
pub fn log_cliente_desconectado(logger: &Logger, ip: &str) {
    logger.info(&format!("Cliente {ip} desconectado"), "Sesion");
}

/// Registra un comando recibido de un cliente
///
/// # Parametros
/// * `logger`: estructura logger donde se envia el mensaje
/// * `ip`: direccion del cliente
/// * `linea`: comando tal como llego
pub fn log_comando_recibido(logger: &Logger, ip: &str, linea: &str) {
    logger.info(&format!("[{ip}] {linea}"), "Sesion");
}

/// Registra un error del hilo escritor de una sesion
pub fn log_error_escritor(logger: &Logger, descripcion: &str) {
    logger.error(descripcion, "Sesion");
}

/// Registra la creacion de un actor de valor
pub fn log_actor_creado(logger: &Logger, clave: &str) {
    logger.info(&format!("Actor creado para la clave '{clave}'"), "Registro");
}

/// Registra la detencion de un actor
pub fn log_actor_detenido(logger: &Logger, clave: &str) {
    logger.info(&format!("Actor de la clave '{clave}' detenido"), "Actor");
}

/// Registra una falla al despachar un payload hacia otra clave
pub fn log_error_despacho(logger: &Logger, clave: &str, descripcion: &str) {
    logger.error(
        &format!("Error despachando hacia la clave '{clave}': {descripcion}"),
        "Registro",
    );
}

/// Registra la cantidad de claves eliminadas por un DEL
pub fn log_claves_eliminadas(logger: &Logger, cantidad: i64) {
    logger.info(&format!("DEL elimino {cantidad} claves"), "Directorio");
}
