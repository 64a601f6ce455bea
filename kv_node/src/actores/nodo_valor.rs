//! Este modulo contiene el actor de valor: un hilo por clave viva
//! que procesa su buzon en serie
use crate::constantes::ERROR_TIPO;
use crate::log_msj::log_mensajes::log_actor_detenido;
use crate::registro::const_cmd::{CMD_DEL, CMD_GETDEL};
use crate::registro::registro_actores::Registro;
use crate::registro::registro_comandos::TipoNodo;
use crate::tipos::dato::Dato;
use logger::logger::Logger;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering::SeqCst};
use std::sync::mpsc::{Receiver, channel};
use std::thread::spawn;

use super::comandos_hash;
use super::comandos_list;
use super::comandos_set;
use super::comandos_string;
use super::mensaje::{HandleNodo, MensajeNodo, Payload};

/// Estado de un actor de valor, uno de los cuatro tipos soportados
#[derive(Debug)]
pub enum EstadoNodo {
    Cadena(String),
    Hash(HashMap<String, String>),
    Lista(VecDeque<String>),
    Conjunto(HashSet<String>),
}

impl EstadoNodo {
    /// Crea el estado inicial vacio para un tipo de valor
    ///
    /// # Retorna
    /// - Some con el estado, None si el tipo no es un tipo de valor
    fn nuevo(tipo: TipoNodo) -> Option<EstadoNodo> {
        match tipo {
            TipoNodo::Cadena => Some(EstadoNodo::Cadena(String::new())),
            TipoNodo::Hash => Some(EstadoNodo::Hash(HashMap::new())),
            TipoNodo::Lista => Some(EstadoNodo::Lista(VecDeque::new())),
            TipoNodo::Conjunto => Some(EstadoNodo::Conjunto(HashSet::new())),
            TipoNodo::Claves | TipoNodo::Cliente => None,
        }
    }

    /// Etiqueta de tipo del estado
    fn tipo(&self) -> TipoNodo {
        match self {
            EstadoNodo::Cadena(_) => TipoNodo::Cadena,
            EstadoNodo::Hash(_) => TipoNodo::Hash,
            EstadoNodo::Lista(_) => TipoNodo::Lista,
            EstadoNodo::Conjunto(_) => TipoNodo::Conjunto,
        }
    }
}

/// Actor dueño del valor de una clave. Su estado solo se toca desde
/// su propio hilo; el resto del sistema le habla por el buzon
#[derive(Debug)]
pub struct NodoValor {
    clave: String,
    estado: EstadoNodo,
    registro: Registro,
    logger: Logger,
}

impl NodoValor {
    /// Crea el actor y lanza su hilo de atencion
    ///
    /// # Parametros
    /// * `clave`: clave que el actor representa
    /// * `tipo`: tipo de valor del actor
    /// * `registro`: registro compartido, usado por los comandos
    ///   que emiten sub-pedidos hacia otras claves
    /// * `logger`: logger donde registrar eventos
    ///
    /// # Retorna
    /// - Handle hacia el buzon del actor, error si el tipo recibido
    ///   no es un tipo de valor
    pub fn spawn(
        clave: &str,
        tipo: TipoNodo,
        registro: Registro,
        logger: Logger,
    ) -> Result<HandleNodo, Dato> {
        let estado = EstadoNodo::nuevo(tipo)
            .ok_or_else(|| Dato::new_error("cannot create a value actor for that command"))?;

        let (buzon, receptor) = channel();
        let detenido = Arc::new(AtomicBool::new(false));
        let bandera = detenido.clone();

        let mut nodo = NodoValor {
            clave: clave.to_string(),
            estado,
            registro,
            logger,
        };
        spawn(move || nodo.correr(receptor, bandera));

        Ok(HandleNodo::new(tipo, buzon, detenido))
    }

    /// Bucle principal del actor: procesa un mensaje a la vez hasta
    /// que el buzon se cierra o llega la señal de detencion. Los
    /// mensajes encolados detras de la señal se descartan
    fn correr(&mut self, receptor: Receiver<MensajeNodo>, detenido: Arc<AtomicBool>) {
        for mensaje in receptor {
            if detenido.load(SeqCst) {
                break;
            }
            match mensaje {
                MensajeNodo::Pregunta(payload, respuesta) => {
                    let dato = self.procesar(&payload).unwrap_or_else(|error| error);
                    let _ = respuesta.send(dato);
                }
                MensajeNodo::Notificacion(payload) => {
                    let _ = self.procesar(&payload);
                }
                MensajeNodo::Detener => break,
            }
        }
        log_actor_detenido(&self.logger, &self.clave);
    }

    /// Valida el tipo del payload contra el propio y despacha al
    /// modulo de comandos correspondiente. Un pedido del tipo
    /// equivocado no muta el estado
    fn procesar(&mut self, payload: &Payload) -> Result<Dato, Dato> {
        if payload.tipo() != Some(self.estado.tipo()) {
            return Err(Dato::new_error(ERROR_TIPO));
        }

        if payload.comando() == CMD_GETDEL {
            return self.getdel();
        }

        match &mut self.estado {
            EstadoNodo::Cadena(valor) => comandos_string::ejecutar(payload, valor),
            EstadoNodo::Hash(campos) => comandos_hash::ejecutar(payload, campos),
            EstadoNodo::Lista(elementos) => {
                comandos_list::ejecutar(payload, elementos, &self.registro)
            }
            EstadoNodo::Conjunto(miembros) => {
                comandos_set::ejecutar(payload, miembros, &self.registro)
            }
        }
    }

    /// Devuelve el valor actual y pide al directorio la baja de la
    /// propia clave, que terminara deteniendo este actor
    fn getdel(&mut self) -> Result<Dato, Dato> {
        let valor = match &self.estado {
            EstadoNodo::Cadena(valor) => valor.to_string(),
            _ => return Err(Dato::new_error(ERROR_TIPO)),
        };

        if let Some(directorio) = self.registro.directorio() {
            directorio.notificar(Payload::interno(&[CMD_DEL, &self.clave]));
        }
        Ok(Dato::Texto(valor))
    }
}
