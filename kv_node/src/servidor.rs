//! Este modulo contiene la implementacion principal del servidor
use crate::actores::directorio::DirectorioClaves;
use crate::cliente::sesion::Sesion;
use crate::config::config_parser::Config;
use crate::constantes::ERROR_MAX_CLIENTES;
use crate::log_msj::log_mensajes::{
    log_bind_error, log_client_count, log_connection_accepted, log_error_accepting_connection,
    log_inicio_servidor, log_max_clients_reached, log_peer_addr_error,
};
use crate::registro::registro_actores::Registro;
use logger::logger::Logger;
use std::io::Write;
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::sync::atomic::Ordering::SeqCst;
use std::sync::atomic::AtomicUsize;
use std::thread::spawn;

/// Servidor del almacen clave-valor. Arma los singletons del
/// proceso (logger, registro de actores y directorio de claves) y
/// atiende el loop de conexiones entrantes con un hilo de sesion
/// por cliente
#[derive(Debug)]
pub struct Servidor {
    config: Config,
    logger: Logger,
    registro: Registro,
    clientes_activos: Arc<AtomicUsize>,
}

impl Servidor {
    /// Crea el servidor junto a su registro y su directorio de
    /// claves, que queda registrado bajo el nombre `keys`
    ///
    /// # Parametros
    /// - `config`: configuracion ya parseada
    pub fn new(config: Config) -> Servidor {
        let logger = Logger::new(&config.get_archivo_log());
        let registro = Registro::new(logger.clone());

        let directorio = DirectorioClaves::spawn(registro.clone(), logger.clone());
        registro.registrar_directorio(directorio);

        Servidor {
            config,
            logger,
            registro,
            clientes_activos: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Bindea el listener y entra al loop bloqueante que acepta
    /// conexiones de clientes. Cada conexion valida se delega a un
    /// hilo de sesion propio
    ///
    /// # Retorna
    /// - `Ok(())` cuando el listener se cierra
    /// - `Err(String)` si no se pudo bindear la direccion
    pub fn start(&self) -> Result<(), String> {
        let direccion = self.config.get_address();
        let listener = TcpListener::bind(&direccion).map_err(|e| {
            log_bind_error(&self.logger, &direccion, &e);
            format!("No se pudo bindear {direccion}: {e}")
        })?;

        log_inicio_servidor(&self.logger, &direccion);

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => self.manejar_conexion_entrante(stream),
                Err(e) => log_error_accepting_connection(&self.logger, e),
            }
        }
        Ok(())
    }

    /// Maneja una conexion entrante: rechaza si se alcanzo el
    /// maximo de clientes y si no lanza el hilo de la sesion
    fn manejar_conexion_entrante(&self, mut stream: TcpStream) {
        let ip = match stream.peer_addr() {
            Ok(direccion) => direccion.to_string(),
            Err(e) => {
                log_peer_addr_error(&self.logger, &e);
                return;
            }
        };

        if self.clientes_activos.load(SeqCst) >= self.config.get_max_clientes() {
            let _ = stream.write_all(format!("{ERROR_MAX_CLIENTES}\n").as_bytes());
            log_max_clients_reached(&ip, &self.logger);
            return;
        }

        self.lanzar_sesion(stream, ip);
    }

    /// Lanza el hilo que atiende la sesion de un cliente y mantiene
    /// el contador de clientes activos
    fn lanzar_sesion(&self, stream: TcpStream, ip: String) {
        self.clientes_activos.fetch_add(1, SeqCst);
        log_connection_accepted(&ip, &self.logger);
        log_client_count(&self.logger, self.clientes_activos.load(SeqCst));

        let sesion = Sesion::new(ip, &stream, self.registro.clone(), self.logger.clone());
        let contador = self.clientes_activos.clone();
        let logger = self.logger.clone();

        spawn(move || {
            sesion.atender(stream);
            contador.fetch_sub(1, SeqCst);
            log_client_count(&logger, contador.load(SeqCst));
        });
    }
}
