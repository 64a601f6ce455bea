//! Este modulo contiene el registro de actores vivos, que mapea
//! cada clave con el buzon de su actor
use crate::actores::mensaje::{HandleNodo, Payload};
use crate::actores::nodo_valor::NodoValor;
use crate::constantes::CLAVE_DIRECTORIO;
use crate::log_msj::log_mensajes::{log_actor_creado, log_error_despacho};
use crate::registro::const_cmd::CMD_ADD;
use crate::registro::registro_comandos::TipoNodo;
use crate::tipos::dato::Dato;
use logger::logger::Logger;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Registro compartido de actores. El alta es atomica bajo el lock
/// de escritura, lo que garantiza a lo sumo un actor por clave.
/// El directorio de claves se registra bajo el nombre reservado
/// `keys` y ademas se guarda aparte para poder notificarle las altas
#[derive(Debug, Clone)]
pub struct Registro {
    actores: Arc<RwLock<HashMap<String, HandleNodo>>>,
    directorio: Arc<RwLock<Option<HandleNodo>>>,
    logger: Logger,
}

impl Registro {
    /// Crea un registro vacio
    pub fn new(logger: Logger) -> Registro {
        Registro {
            actores: Arc::new(RwLock::new(HashMap::new())),
            directorio: Arc::new(RwLock::new(None)),
            logger,
        }
    }

    /// Registra el actor del directorio de claves. Se invoca una
    /// sola vez durante el arranque del servidor
    pub fn registrar_directorio(&self, handle: HandleNodo) {
        if let Ok(mut mapa) = self.actores.write() {
            mapa.insert(CLAVE_DIRECTORIO.to_string(), handle.clone());
        }
        if let Ok(mut directorio) = self.directorio.write() {
            *directorio = Some(handle);
        }
    }

    /// Devuelve el handle del directorio de claves
    pub fn directorio(&self) -> Option<HandleNodo> {
        self.directorio.read().ok().and_then(|guarda| guarda.clone())
    }

    /// Busca el actor vivo registrado bajo una clave
    ///
    /// # Parametros
    /// * `clave`: clave a resolver
    ///
    /// # Retorna
    /// - Some con el handle si el actor existe y no fue detenido,
    ///   None en otro caso
    pub fn resolver(&self, clave: &str) -> Option<HandleNodo> {
        let guarda = self.actores.read().ok()?;
        guarda
            .get(clave)
            .filter(|handle| !handle.esta_detenido())
            .cloned()
    }

    /// Devuelve el actor de una clave, creandolo si no existe.
    /// La creacion notifica el alta al directorio antes de devolver
    /// el handle, de modo que la clave ya es visible cuando el
    /// primer comando se entrega
    ///
    /// # Parametros
    /// * `clave`: clave del actor
    /// * `tipo`: tipo de valor con el que crear el actor si falta
    ///
    /// # Retorna
    /// - Tupla (handle, creado), error si el lock esta envenenado
    pub fn obtener_o_crear(
        &self,
        clave: &str,
        tipo: TipoNodo,
    ) -> Result<(HandleNodo, bool), Dato> {
        let mut mapa = self.actores.write().map_err(|_| {
            Dato::new_error("No se pudo obtener el lock de escritura del registro")
        })?;

        if let Some(handle) = mapa.get(clave) {
            if !handle.esta_detenido() {
                return Ok((handle.clone(), false));
            }
        }

        let handle = NodoValor::spawn(clave, tipo, self.clone(), self.logger.clone())?;
        mapa.insert(clave.to_string(), handle.clone());
        drop(mapa);

        if let Some(directorio) = self.directorio() {
            directorio.notificar(Payload::interno(&[CMD_ADD, clave]));
        }
        log_actor_creado(&self.logger, clave);
        Ok((handle, true))
    }

    /// Quita una clave del registro y devuelve su handle, si estaba
    pub fn quitar(&self, clave: &str) -> Option<HandleNodo> {
        self.actores.write().ok()?.remove(clave)
    }

    /// Entrega un payload sin esperar respuesta, creando el actor
    /// destino si hace falta. Lo usan los comandos que mueven datos
    /// entre claves (rpoplpush, smove, mset)
    ///
    /// # Parametros
    /// * `clave`: clave destino
    /// * `tipo`: tipo de valor del actor destino
    /// * `payload`: pedido a entregar
    pub fn despachar(&self, clave: &str, tipo: TipoNodo, payload: Payload) {
        match self.obtener_o_crear(clave, tipo) {
            Ok((handle, _)) => handle.notificar(payload),
            Err(e) => log_error_despacho(&self.logger, clave, &e.a_linea()),
        }
    }
}
