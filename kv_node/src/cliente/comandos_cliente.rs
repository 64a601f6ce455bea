//! Este modulo contiene los comandos multi-clave que la sesion
//! orquesta por fuera de los actores de valor
use crate::actores::mensaje::Payload;
use crate::actores::utils::assert_cantidad_argumentos;
use crate::constantes::{OPERACION_EXITOSA, TIMEOUT_SESION};
use crate::registro::const_cmd::*;
use crate::registro::registro_actores::Registro;
use crate::registro::registro_comandos::TipoNodo;
use crate::tipos::dato::Dato;

/// Despacha un comando de cliente
///
/// # Parametros
/// * `payload`: pedido a ejecutar
/// * `registro`: registro de actores
///
/// # Retorna
/// - Respuesta del comando, error de comando en otro caso
pub fn ejecutar(payload: &Payload, registro: &Registro) -> Result<Dato, Dato> {
    let argumentos = payload.argumentos();
    match payload.comando() {
        CMD_MGET => mget(argumentos, registro),
        CMD_MSET => mset(argumentos, registro),
        CMD_MSETNX => msetnx(argumentos, registro),
        otro => Err(Dato::new_error(&format!(
            "command '{otro}' is not a client command"
        ))),
    }
}

/// Pide el valor de cada clave recibida, en orden. Cada clave pasa
/// por el camino estandar de resolucion, por lo que una clave
/// inexistente se crea vacia
///
/// # Parametros
/// * `argumentos`: claves a consultar
/// * `registro`: registro de actores
///
/// # Retorna
/// - Lista con una respuesta por clave, en el orden pedido
pub fn mget(argumentos: &[String], registro: &Registro) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_MGET, 1, argumentos.len())?;

    let mut valores = Vec::with_capacity(argumentos.len());
    for clave in argumentos {
        let (handle, _) = registro.obtener_o_crear(clave, TipoNodo::Cadena)?;
        let respuesta = handle.preguntar(Payload::interno(&[CMD_GET, clave]), TIMEOUT_SESION)?;
        valores.push(respuesta.a_linea());
    }
    Ok(Dato::new_lista(valores))
}

/// Asigna cada par clave,valor recibido. Los sets viajan como
/// notificaciones: la respuesta OK no espera a los actores, pero
/// cada destino procesa su buzon en serie
///
/// # Parametros
/// * `argumentos`: secuencia alternada de claves y valores
///
/// # Retorna
/// - OK, error si falta el valor de alguna clave
pub fn mset(argumentos: &[String], registro: &Registro) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_MSET, 2, argumentos.len())?;
    if argumentos.len() % 2 != 0 {
        return Err(Dato::new_error(&format!(
            "wrong number of arguments for '{CMD_MSET}' command"
        )));
    }

    for par in argumentos.chunks(2) {
        registro.despachar(
            &par[0],
            TipoNodo::Cadena,
            Payload::interno(&[CMD_SET, &par[0], &par[1]]),
        );
    }
    Ok(Dato::new_texto(OPERACION_EXITOSA))
}

/// Asigna los pares recibidos solo si ninguna de las claves existe.
/// La existencia se consulta clave por clave al directorio antes de
/// tocar ningun actor
///
/// # Retorna
/// - 1 si se escribieron todos los pares, 0 si alguna clave existia
pub fn msetnx(argumentos: &[String], registro: &Registro) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_MSETNX, 2, argumentos.len())?;
    if argumentos.len() % 2 != 0 {
        return Err(Dato::new_error(&format!(
            "wrong number of arguments for '{CMD_MSETNX}' command"
        )));
    }

    let directorio = registro
        .directorio()
        .ok_or_else(|| Dato::new_error("key directory is not available"))?;

    for par in argumentos.chunks(2) {
        let respuesta =
            directorio.preguntar(Payload::interno(&[CMD_EXISTS, &par[0]]), TIMEOUT_SESION)?;
        if respuesta == Dato::new_entero(1) {
            return Ok(Dato::new_entero(0));
        }
    }

    mset(argumentos, registro)?;
    Ok(Dato::new_entero(1))
}
