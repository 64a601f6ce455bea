//! Este modulo contiene el payload parseado de un comando y los
//! mensajes que viajan por los buzones de los actores
use crate::constantes::{CLAVE_DIRECTORIO, ERROR_ACTOR_DETENIDO, ERROR_TIMEOUT};
use crate::registro::registro_comandos::{TipoNodo, tipo_de_comando};
use crate::tipos::dato::Dato;
use std::sync::atomic::{AtomicBool, Ordering::SeqCst};
use std::sync::mpsc::{Sender, channel};
use std::sync::Arc;
use std::time::Duration;

/// Pedido parseado e inmutable. Se construye una vez por linea
/// recibida y se reenvia tal cual entre la sesion y los actores
#[derive(Debug, Clone)]
pub struct Payload {
    comando: String,
    tipo: Option<TipoNodo>,
    clave: String,
    argumentos: Vec<String>,
    es_comando_cliente: bool,
    es_comando_claves: bool,
}

impl Payload {
    /// Construye el payload a partir de los tokens de una linea.
    ///
    /// El token 0 es el comando (pasado a minusculas). Los comandos
    /// de cliente no consumen clave; los comandos del directorio
    /// apuntan implicitamente a la clave `keys`; para el resto el
    /// token 1 es la clave y los siguientes son los argumentos
    ///
    /// # Parametros
    /// * `tokens`: linea ya separada por espacios
    ///
    /// # Retorna
    /// - Payload listo para rutear. Un comando desconocido produce
    ///   un payload con tipo vacio, que la sesion reporta como error
    pub fn desde_tokens(tokens: &[String]) -> Payload {
        let comando = tokens.first().map(|t| t.to_lowercase()).unwrap_or_default();
        let tipo = tipo_de_comando(&comando);
        let es_comando_cliente = tipo == Some(TipoNodo::Cliente);
        let es_comando_claves = tipo == Some(TipoNodo::Claves);

        let (clave, argumentos) = if es_comando_cliente {
            (String::new(), tokens[1..].to_vec())
        } else if es_comando_claves {
            (CLAVE_DIRECTORIO.to_string(), tokens[1..].to_vec())
        } else {
            let clave = tokens.get(1).cloned().unwrap_or_default();
            let argumentos = if tokens.len() > 2 {
                tokens[2..].to_vec()
            } else {
                Vec::new()
            };
            (clave, argumentos)
        };

        Payload {
            comando,
            tipo,
            clave,
            argumentos,
            es_comando_cliente,
            es_comando_claves,
        }
    }

    /// Construye el payload a partir de una linea de texto
    pub fn desde_linea(linea: &str) -> Payload {
        let tokens: Vec<String> = linea.split_whitespace().map(|t| t.to_string()).collect();
        Payload::desde_tokens(&tokens)
    }

    /// Arma un payload interno, usado por los comandos que emiten
    /// sub-pedidos hacia otros actores
    ///
    /// # Parametros
    /// * `tokens`: comando completo, con clave y argumentos
    pub fn interno(tokens: &[&str]) -> Payload {
        let tokens: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        Payload::desde_tokens(&tokens)
    }

    pub fn comando(&self) -> &str {
        &self.comando
    }

    pub fn tipo(&self) -> Option<TipoNodo> {
        self.tipo
    }

    pub fn clave(&self) -> &str {
        &self.clave
    }

    pub fn argumentos(&self) -> &[String] {
        &self.argumentos
    }

    pub fn es_comando_cliente(&self) -> bool {
        self.es_comando_cliente
    }

    pub fn es_comando_claves(&self) -> bool {
        self.es_comando_claves
    }
}

/// Mensaje que recibe el buzon de un actor
#[derive(Debug)]
pub enum MensajeNodo {
    /// Pedido con canal de respuesta: el actor procesa y contesta
    Pregunta(Payload, Sender<Dato>),
    /// Pedido sin respuesta, usado por los fan-out asincronicos
    Notificacion(Payload),
    /// Despierta al actor para que observe su bandera de detencion
    Detener,
}

/// Handle clonable hacia el buzon de un actor. La bandera de
/// detencion viaja junto al sender para que el alta y la baja de
/// actores sea visible sin tocar el hilo del actor
#[derive(Debug, Clone)]
pub struct HandleNodo {
    tipo: TipoNodo,
    buzon: Sender<MensajeNodo>,
    detenido: Arc<AtomicBool>,
}

impl HandleNodo {
    pub fn new(tipo: TipoNodo, buzon: Sender<MensajeNodo>, detenido: Arc<AtomicBool>) -> Self {
        HandleNodo {
            tipo,
            buzon,
            detenido,
        }
    }

    pub fn tipo(&self) -> TipoNodo {
        self.tipo
    }

    pub fn esta_detenido(&self) -> bool {
        self.detenido.load(SeqCst)
    }

    /// Envia el payload y espera la respuesta del actor
    ///
    /// # Parametros
    /// * `payload`: pedido a entregar
    /// * `timeout`: tiempo maximo de espera
    ///
    /// # Retorna
    /// - Ok con la respuesta del actor (que puede ser un error de
    ///   comando), Err ante timeout o buzon cerrado
    pub fn preguntar(&self, payload: Payload, timeout: Duration) -> Result<Dato, Dato> {
        let (tx_respuesta, rx_respuesta) = channel();
        self.buzon
            .send(MensajeNodo::Pregunta(payload, tx_respuesta))
            .map_err(|_| Dato::new_error(ERROR_ACTOR_DETENIDO))?;

        rx_respuesta
            .recv_timeout(timeout)
            .map_err(|_| Dato::new_error(ERROR_TIMEOUT))
    }

    /// Envia el payload sin esperar respuesta
    pub fn notificar(&self, payload: Payload) {
        let _ = self.buzon.send(MensajeNodo::Notificacion(payload));
    }

    /// Marca el actor como detenido y lo despierta. Los mensajes
    /// que ya estaban encolados se descartan
    pub fn detener(&self) {
        self.detenido.store(true, SeqCst);
        let _ = self.buzon.send(MensajeNodo::Detener);
    }
}
