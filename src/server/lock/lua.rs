//! Lua scripts for the Redis lock manager

// Lua script to release a lock only if it is still held by the caller
// Prevents a run whose lock expired from deleting a lock since acquired by another run
//
// KEYS[1]: lock key
// ARGV[1]: owner token
//
// Returns:
//   1 if the lock was released
//   0 if the lock is missing or held by another owner
pub static RELEASE_LOCK_SCRIPT: &str = r#"
local lock_key = KEYS[1]
local owner = ARGV[1]

if redis.call('GET', lock_key) == owner then
    return redis.call('DEL', lock_key)
end

return 0
"#;
