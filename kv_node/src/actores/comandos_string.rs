//! Este modulo contiene la implementacion de los comandos para
//! los actores de tipo string
use crate::constantes::{ERROR_VALOR_NO_ENTERO, OPERACION_EXITOSA};
use crate::registro::const_cmd::*;
use crate::tipos::dato::Dato;

use super::mensaje::Payload;
use super::utils::{
    ajustar_indices, assert_cantidad_argumentos, parse_entero, parse_flotante, parse_indice,
};

/// Despacha un comando de string sobre el valor del actor
///
/// # Parametros
/// * `payload`: pedido a ejecutar
/// * `valor`: estado del actor
///
/// # Retorna
/// - Respuesta del comando, error de comando en otro caso
pub fn ejecutar(payload: &Payload, valor: &mut String) -> Result<Dato, Dato> {
    let argumentos = payload.argumentos();
    match payload.comando() {
        CMD_GET => get(valor),
        CMD_SET => set(argumentos, valor),
        CMD_SETNX => setnx(argumentos, valor),
        CMD_GETSET => getset(argumentos, valor),
        CMD_APPEND => append(argumentos, valor),
        CMD_STRLEN => strlen(valor),
        CMD_GETRANGE | CMD_SUBSTR => getrange(argumentos, valor),
        CMD_SETRANGE => setrange(argumentos, valor),
        CMD_INCR => incrementar(valor, 1),
        CMD_DECR => incrementar(valor, -1),
        CMD_INCRBY => incrby(CMD_INCRBY, argumentos, valor, 1),
        CMD_DECRBY => incrby(CMD_DECRBY, argumentos, valor, -1),
        CMD_INCRBYFLOAT => incrbyfloat(argumentos, valor),
        CMD_BITCOUNT => bitcount(valor),
        otro => Err(Dato::new_error(&format!(
            "command '{otro}' is not a string command"
        ))),
    }
}

/// Devuelve el valor actual del actor
pub fn get(valor: &String) -> Result<Dato, Dato> {
    Ok(Dato::new_texto(valor))
}

/// Asigna el valor del actor
///
/// # Parametros
/// * `argumentos`: valor a guardar
/// * `valor`: estado del actor
///
/// # Retorna
/// - OK en caso de exito
pub fn set(argumentos: &[String], valor: &mut String) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_SET, 1, argumentos.len())?;
    *valor = argumentos[0].to_string();
    Ok(Dato::new_texto(OPERACION_EXITOSA))
}

/// Asigna el valor del actor y responde 1. El control de que la
/// clave no existiera ya ocurrio en la sesion, por lo que al llegar
/// aca la asignacion siempre procede
pub fn setnx(argumentos: &[String], valor: &mut String) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_SETNX, 1, argumentos.len())?;
    *valor = argumentos[0].to_string();
    Ok(Dato::new_entero(1))
}

/// Asigna un nuevo valor y devuelve el anterior
pub fn getset(argumentos: &[String], valor: &mut String) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_GETSET, 1, argumentos.len())?;
    let anterior = valor.to_string();
    *valor = argumentos[0].to_string();
    Ok(Dato::Texto(anterior))
}

/// Extiende el valor del actor con el argumento recibido
///
/// # Parametros
/// * `argumentos`: sufijo a concatenar
/// * `valor`: estado del actor
///
/// # Retorna
/// - El nuevo valor completo
pub fn append(argumentos: &[String], valor: &mut String) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_APPEND, 1, argumentos.len())?;
    valor.push_str(&argumentos[0]);
    Ok(Dato::new_texto(valor))
}

/// Devuelve el largo del valor en caracteres
pub fn strlen(valor: &String) -> Result<Dato, Dato> {
    Ok(Dato::new_entero(valor.chars().count() as i64))
}

/// Obtiene un substring del valor del actor
///
/// # Parametros
/// * `argumentos`: indice de inicio e indice de fin del substring.
///   Los indices negativos se cuentan desde el final del valor
/// * `valor`: estado del actor
///
/// # Retorna
/// - El substring pedido, vacio ante un rango invalido
pub fn getrange(argumentos: &[String], valor: &String) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_GETRANGE, 2, argumentos.len())?;
    let inicio = parse_indice(&argumentos[0])?;
    let fin = parse_indice(&argumentos[1])?;

    let largo = valor.chars().count() as isize;
    let (inicio, fin) = ajustar_indices(inicio, fin, largo);
    if inicio >= fin {
        return Ok(Dato::new_texto(""));
    }

    let recorte: String = valor.chars().skip(inicio).take(fin - inicio).collect();
    Ok(Dato::Texto(recorte))
}

/// Reemplaza el caracter en la posicion recibida por el argumento.
/// Si la posicion queda mas alla del final, el argumento se
/// concatena al valor actual
///
/// # Parametros
/// * `argumentos`: posicion a reemplazar y texto de reemplazo
/// * `valor`: estado del actor
///
/// # Retorna
/// - El nuevo valor completo
pub fn setrange(argumentos: &[String], valor: &mut String) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_SETRANGE, 2, argumentos.len())?;
    let posicion = parse_indice(&argumentos[0])?.max(0) as usize;
    let reemplazo = &argumentos[1];

    let caracteres: Vec<char> = valor.chars().collect();
    let mut nuevo: String = caracteres.iter().take(posicion).collect();
    nuevo.push_str(reemplazo);
    if posicion + 1 < caracteres.len() {
        nuevo.extend(caracteres[posicion + 1..].iter());
    }

    *valor = nuevo;
    Ok(Dato::new_texto(valor))
}

/// Suma un delta fijo al valor interpretado como entero. El valor
/// vacio se interpreta como "0"
///
/// # Parametros
/// * `valor`: estado del actor
/// * `delta`: 1 para incr, -1 para decr
///
/// # Retorna
/// - El valor resultante, error si el valor no es numerico
fn incrementar(valor: &mut String, delta: i64) -> Result<Dato, Dato> {
    let actual = valor_numerico(valor)?;
    let nuevo = actual
        .checked_add(delta)
        .ok_or_else(|| Dato::new_error(ERROR_VALOR_NO_ENTERO))?;
    *valor = nuevo.to_string();
    Ok(Dato::new_entero(nuevo))
}

/// Suma el delta recibido por argumento, con el signo indicado
fn incrby(comando: &str, argumentos: &[String], valor: &mut String, signo: i64) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(comando, 1, argumentos.len())?;
    let delta = parse_entero(&argumentos[0])?;
    incrementar(valor, delta * signo)
}

/// Suma un delta flotante al valor interpretado como flotante
pub fn incrbyfloat(argumentos: &[String], valor: &mut String) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_INCRBYFLOAT, 1, argumentos.len())?;
    let delta = parse_flotante(&argumentos[0])?;
    let actual = if valor.is_empty() {
        0.0
    } else {
        parse_flotante(valor)?
    };
    let nuevo = actual + delta;
    *valor = nuevo.to_string();
    Ok(Dato::new_texto(valor))
}

/// Cuenta la cantidad total de bits en 1 de los bytes del valor
pub fn bitcount(valor: &String) -> Result<Dato, Dato> {
    let total: u32 = valor.bytes().map(|byte| byte.count_ones()).sum();
    Ok(Dato::new_entero(total as i64))
}

/// Interpreta el valor actual como entero, con vacio valiendo 0
fn valor_numerico(valor: &str) -> Result<i64, Dato> {
    if valor.is_empty() {
        return Ok(0);
    }
    parse_entero(valor)
}
