// Comandos de strings
pub const CMD_GET: &str = "get";
pub const CMD_SET: &str = "set";
pub const CMD_SETNX: &str = "setnx";
pub const CMD_GETSET: &str = "getset";
pub const CMD_GETDEL: &str = "getdel";
pub const CMD_APPEND: &str = "append";
pub const CMD_STRLEN: &str = "strlen";
pub const CMD_GETRANGE: &str = "getrange";
pub const CMD_SUBSTR: &str = "substr";
pub const CMD_SETRANGE: &str = "setrange";
pub const CMD_INCR: &str = "incr";
pub const CMD_INCRBY: &str = "incrby";
pub const CMD_DECR: &str = "decr";
pub const CMD_DECRBY: &str = "decrby";
pub const CMD_INCRBYFLOAT: &str = "incrbyfloat";
pub const CMD_BITCOUNT: &str = "bitcount";

// Comandos de hashes
pub const CMD_HGET: &str = "hget";
pub const CMD_HSET: &str = "hset";
pub const CMD_HSETNX: &str = "hsetnx";
pub const CMD_HDEL: &str = "hdel";
pub const CMD_HEXISTS: &str = "hexists";
pub const CMD_HGETALL: &str = "hgetall";
pub const CMD_HKEYS: &str = "hkeys";
pub const CMD_HVALS: &str = "hvals";
pub const CMD_HLEN: &str = "hlen";
pub const CMD_HMGET: &str = "hmget";
pub const CMD_HMSET: &str = "hmset";
pub const CMD_HINCRBY: &str = "hincrby";
pub const CMD_HINCRBYFLOAT: &str = "hincrbyfloat";
pub const CMD_HSCAN: &str = "hscan";

// Comandos de listas
pub const CMD_LPUSH: &str = "lpush";
pub const CMD_RPUSH: &str = "rpush";
pub const CMD_LPUSHX: &str = "lpushx";
pub const CMD_RPUSHX: &str = "rpushx";
pub const CMD_LPOP: &str = "lpop";
pub const CMD_RPOP: &str = "rpop";
pub const CMD_LLEN: &str = "llen";
pub const CMD_LSET: &str = "lset";
pub const CMD_LINDEX: &str = "lindex";
pub const CMD_LREM: &str = "lrem";
pub const CMD_LRANGE: &str = "lrange";
pub const CMD_LTRIM: &str = "ltrim";
pub const CMD_LINSERT: &str = "linsert";
pub const CMD_RPOPLPUSH: &str = "rpoplpush";
pub const CMD_BLPOP: &str = "blpop";
pub const CMD_BRPOP: &str = "brpop";
pub const CMD_BRPOPLPUSH: &str = "brpoplpush";

// Comandos de sets
pub const CMD_SADD: &str = "sadd";
pub const CMD_SREM: &str = "srem";
pub const CMD_SCARD: &str = "scard";
pub const CMD_SISMEMBER: &str = "sismember";
pub const CMD_SMEMBERS: &str = "smembers";
pub const CMD_SRANDMEMBER: &str = "srandmember";
pub const CMD_SPOP: &str = "spop";
pub const CMD_SDIFF: &str = "sdiff";
pub const CMD_SINTER: &str = "sinter";
pub const CMD_SUNION: &str = "sunion";
pub const CMD_SDIFFSTORE: &str = "sdiffstore";
pub const CMD_SINTERSTORE: &str = "sinterstore";
pub const CMD_SUNIONSTORE: &str = "sunionstore";
pub const CMD_SMOVE: &str = "smove";
pub const CMD_SSCAN: &str = "sscan";

// Comandos del directorio de claves
pub const CMD_KEYS: &str = "keys";
pub const CMD_SCAN: &str = "scan";
pub const CMD_EXISTS: &str = "exists";
pub const CMD_RANDOMKEY: &str = "randomkey";
pub const CMD_DEL: &str = "del";
pub const CMD_ADD: &str = "add";

// Comandos orquestados por la sesion
pub const CMD_MGET: &str = "mget";
pub const CMD_MSET: &str = "mset";
pub const CMD_MSETNX: &str = "msetnx";
