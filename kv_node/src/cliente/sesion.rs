//! Este modulo contiene la sesion de un cliente: el ciclo de vida
//! de una conexion TCP, desde el armado de lineas hasta el ruteo
//! de cada payload y la escritura de las respuestas
use crate::actores::mensaje::Payload;
use crate::constantes::{ERROR_COMANDO_DESCONOCIDO, ERROR_FALTAN_PARAMETROS, TIMEOUT_SESION};
use crate::log_msj::log_mensajes::{
    log_cliente_desconectado, log_comando_recibido, log_error_escritor,
};
use crate::registro::registro_actores::Registro;
use crate::registro::registro_comandos::{TipoNodo, debe_existir, no_debe_existir};
use crate::tipos::dato::Dato;
use crate::cliente::comandos_cliente;
use logger::logger::Logger;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpStream;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::spawn;

/// Sesion de un cliente conectado. Las respuestas se encolan hacia
/// un hilo escritor propio, que es el unico que toca el stream de
/// salida
#[derive(Debug)]
pub struct Sesion {
    id: String,
    registro: Registro,
    logger: Logger,
    emisor: Sender<String>,
}

impl Sesion {
    /// Crea la sesion y lanza su hilo escritor
    ///
    /// # Parametros
    /// * `id`: direccion del cliente, usada en los logs
    /// * `stream`: stream de la conexion, se clona para el escritor
    /// * `registro`: registro de actores del proceso
    /// * `logger`: logger donde registrar eventos
    pub fn new(id: String, stream: &TcpStream, registro: Registro, logger: Logger) -> Sesion {
        let (emisor, receptor) = channel();

        match stream.try_clone() {
            Ok(escritor) => spawn_hilo_escritor(receptor, logger.clone(), escritor),
            Err(e) => {
                log_error_escritor(&logger, &format!("No se pudo clonar el stream: {e}"));
            }
        }

        Sesion {
            id,
            registro,
            logger,
            emisor,
        }
    }

    /// Ciclo de recepcion de la sesion: acumula bytes hasta cada
    /// salto de linea y procesa un comando por linea completa.
    /// Corre hasta que el peer cierra la conexion
    pub fn atender(&self, stream: TcpStream) {
        let mut lector = BufReader::new(stream);
        let mut linea = String::new();

        loop {
            linea.clear();
            match lector.read_line(&mut linea) {
                Ok(0) => break,
                Ok(_) => {
                    // una linea sin terminador es un resto parcial en el cierre
                    if !linea.ends_with('\n') {
                        break;
                    }
                    self.procesar_linea(&linea);
                }
                Err(_) => break,
            }
        }
        log_cliente_desconectado(&self.logger, &self.id);
    }

    /// Parsea una linea completa, la rutea y encola la respuesta
    fn procesar_linea(&self, linea: &str) {
        let recortada = linea.trim_end_matches(['\r', '\n']);
        if recortada.trim().is_empty() {
            return;
        }

        log_comando_recibido(&self.logger, &self.id, recortada);
        let payload = Payload::desde_linea(recortada);
        let respuesta = self.rutear(payload).unwrap_or_else(|error| error);
        self.responder(respuesta);
    }

    /// Decide quien atiende el payload: la propia sesion para los
    /// comandos de cliente, el directorio para los comandos de
    /// claves y el actor de la clave para el resto
    fn rutear(&self, payload: Payload) -> Result<Dato, Dato> {
        match payload.tipo() {
            None => Err(Dato::new_error(ERROR_COMANDO_DESCONOCIDO)),
            Some(TipoNodo::Cliente) => comandos_cliente::ejecutar(&payload, &self.registro),
            Some(TipoNodo::Claves) => {
                let directorio = self
                    .registro
                    .directorio()
                    .ok_or_else(|| Dato::new_error("key directory is not available"))?;
                directorio.preguntar(payload, TIMEOUT_SESION)
            }
            Some(tipo) => self.manejar(payload, tipo),
        }
    }

    /// Resuelve el actor de la clave y le entrega el payload,
    /// aplicando las precondiciones de existencia antes de crear
    /// o reenviar nada
    ///
    /// # Parametros
    /// * `payload`: pedido a entregar
    /// * `tipo`: tipo de valor dueño del comando
    fn manejar(&self, payload: Payload, tipo: TipoNodo) -> Result<Dato, Dato> {
        if payload.clave().is_empty() {
            return Err(Dato::new_error(ERROR_FALTAN_PARAMETROS));
        }

        match self.registro.resolver(payload.clave()) {
            Some(handle) => {
                if no_debe_existir(payload.comando()) {
                    return Ok(Dato::new_entero(0));
                }
                handle.preguntar(payload, TIMEOUT_SESION)
            }
            None => {
                if debe_existir(payload.comando()) {
                    return Ok(Dato::new_entero(0));
                }
                let (handle, _) = self.registro.obtener_o_crear(payload.clave(), tipo)?;
                handle.preguntar(payload, TIMEOUT_SESION)
            }
        }
    }

    /// Encola una respuesta hacia el hilo escritor
    fn responder(&self, dato: Dato) {
        if self.emisor.send(dato.a_linea()).is_err() {
            log_error_escritor(
                &self.logger,
                &format!("Error al encolar respuesta para {}", self.id),
            );
        }
    }
}

/// Lanza el hilo escritor de la sesion: recibe respuestas ya
/// serializadas y las escribe con su salto de linea final
///
/// # Parametros
/// * `receptor`: extremo de recepcion de las respuestas
/// * `logger`: logger donde registrar errores de escritura
/// * `escritor`: stream de salida hacia el cliente
fn spawn_hilo_escritor(receptor: Receiver<String>, logger: Logger, mut escritor: TcpStream) {
    spawn(move || {
        while let Ok(respuesta) = receptor.recv() {
            let escritura = escritor
                .write_all(respuesta.as_bytes())
                .and_then(|_| escritor.write_all(b"\n"))
                .and_then(|_| escritor.flush());
            if let Err(e) = escritura {
                log_error_escritor(&logger, &format!("Error escribiendo respuesta: {e}"));
                break;
            }
        }
    });
}
