//! Este modulo contiene las constantes compartidas por el nodo
use std::time::Duration;

/// Host por defecto en el que escucha el servidor
pub const HOST_DEFAULT: &str = "localhost";
/// Puerto por defecto en el que escucha el servidor
pub const PUERTO_DEFAULT: u16 = 9999;
/// Archivo de log por defecto
pub const ARCHIVO_LOG_DEFAULT: &str = "kv_node.log";
/// Cantidad maxima de clientes concurrentes aceptados por defecto
pub const MAX_CLIENTES_DEFAULT: usize = 128;

/// Nombre reservado bajo el que se registra el directorio de claves
pub const CLAVE_DIRECTORIO: &str = "keys";

/// Tiempo maximo que una sesion espera la respuesta de un actor
pub const TIMEOUT_SESION: Duration = Duration::from_secs(10);
/// Tiempo maximo que un actor espera la respuesta de otro actor
pub const TIMEOUT_FANOUT: Duration = Duration::from_secs(2);

/// Respuesta de las operaciones exitosas sin valor de retorno
pub const OPERACION_EXITOSA: &str = "OK";
/// Respuesta de los comandos reconocidos pero no implementados
pub const NO_IMPLEMENTADO: &str = "Not implemented";
/// Representacion textual de un valor inexistente
pub const RESPUESTA_NULA: &str = "None";

/// Valores por defecto del motor de scan
pub const CURSOR_DEFAULT: usize = 0;
pub const PATRON_DEFAULT: &str = "*";
pub const CANTIDAD_SCAN_DEFAULT: usize = 10;

// Errores reportados al cliente como texto plano, sin prefijo
pub const ERROR_COMANDO_DESCONOCIDO: &str = "Unknown command";
pub const ERROR_FALTAN_PARAMETROS: &str = "Too few parameters";
pub const ERROR_TIPO: &str = "WRONGTYPE Operation against a key holding the wrong kind of value";
pub const ERROR_TIMEOUT: &str = "Request timed out";
pub const ERROR_ACTOR_DETENIDO: &str = "Key actor is gone";
pub const ERROR_VALOR_NO_ENTERO: &str = "value is not an integer or out of range";
pub const ERROR_VALOR_NO_FLOTANTE: &str = "value is not a valid float";
pub const ERROR_INDICE: &str = "index out of range";
pub const ERROR_PATRON: &str = "invalid glob pattern";
pub const ERROR_MAX_CLIENTES: &str = "max number of clients reached";
