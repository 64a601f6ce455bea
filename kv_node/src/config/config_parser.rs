//! Este módulo contiene la estructura que parsea la configuración
//! del servidor a partir de los argumentos de línea de comandos
use crate::constantes::{
    ARCHIVO_LOG_DEFAULT, HOST_DEFAULT, MAX_CLIENTES_DEFAULT, PUERTO_DEFAULT,
};

/// Estructura para almacenar la configuración del servidor
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    host: String,
    puerto: u16,
    archivo_log: String,
    max_clientes: usize,
}

impl Config {
    /// Crea una nueva instancia de Config a partir de los argumentos
    /// recibidos. El binario acepta
    /// `[host] [puerto] [archivo_log] [max_clientes]`, todos
    /// opcionales, sin subcomandos
    ///
    /// # Parametros
    /// - `args`: argumentos tal como los entrega `env::args`
    ///
    /// # Retorna
    /// - `Ok(Config)` si los argumentos son validos
    /// - `Err(String)` si el puerto o el maximo de clientes no son
    ///   numeros validos
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let host = args
            .get(1)
            .cloned()
            .unwrap_or_else(|| HOST_DEFAULT.to_string());

        let puerto = match args.get(2) {
            Some(token) => token
                .parse::<u16>()
                .map_err(|_| format!("Puerto inválido: '{token}'"))?,
            None => PUERTO_DEFAULT,
        };

        let archivo_log = args
            .get(3)
            .cloned()
            .unwrap_or_else(|| ARCHIVO_LOG_DEFAULT.to_string());

        let max_clientes = match args.get(4) {
            Some(token) => token
                .parse::<usize>()
                .map_err(|_| format!("Máximo de clientes inválido: '{token}'"))?,
            None => MAX_CLIENTES_DEFAULT,
        };

        Ok(Config {
            host,
            puerto,
            archivo_log,
            max_clientes,
        })
    }

    // funciones publicas :: getters

    /// Direccion completa en formato host:puerto
    pub fn get_address(&self) -> String {
        format!("{}:{}", self.host, self.puerto)
    }

    pub fn get_host(&self) -> String {
        self.host.to_string()
    }

    pub fn get_puerto(&self) -> u16 {
        self.puerto
    }

    pub fn get_archivo_log(&self) -> String {
        self.archivo_log.to_string()
    }

    pub fn get_max_clientes(&self) -> usize {
        self.max_clientes
    }
}
