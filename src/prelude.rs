//! Declarations standing in for the system headers
//!
//! The self-hosting compiler cannot read `<stdio.h>` and friends, so every compilation
//! unit starts with this block. It only declares what the compiler's own sources use,
//! laid out for the x86-64 System V ABI (LP64: `long` and pointers are 64 bits).
//!
//! Layout notes:
//! - `__va_elem` mirrors the register save state the ABI uses for variadic calls. The
//!   `va_start` rewrite copies the frame's `__va_area__` into a `va_list` built from it.
//! - `struct stat` and `glob_t` are opaque to callers apart from the glob fields read
//!   directly; both carry 512 bytes of padding so libc can never write past them.
//! - `assert` and `va_end` cannot be declared away, so they get empty bodies.

/// The prelude text, emitted verbatim before any rewritten source.
pub const PRELUDE: &str = r#"typedef signed char int8_t;
typedef short int16_t;
typedef int int32_t;
typedef long int64_t;
typedef unsigned long size_t;

typedef unsigned char uint8_t;
typedef unsigned short uint16_t;
typedef unsigned int uint32_t;
typedef unsigned long uint64_t;

typedef struct FILE FILE;
extern FILE *stdin;
extern FILE *stdout;
extern FILE *stderr;

typedef struct {
  int gp_offset;
  int fp_offset;
  void *overflow_arg_area;
  void *reg_save_area;
} __va_elem;

typedef __va_elem va_list[1];

struct stat {
  char _[512];
};

typedef struct {
  size_t gl_pathc;
  char **gl_pathv;
  size_t gl_offs;
  char _[512];
} glob_t;

void *malloc(long size);
void *calloc(long nmemb, long size);
void *realloc(void *buf, long size);
int *__errno_location();
char *strerror(int errnum);
FILE *fopen(char *pathname, char *mode);
FILE *open_memstream(char **ptr, size_t *sizeloc);
long fread(void *ptr, long size, long nmemb, FILE *stream);
size_t fwrite(void *ptr, size_t size, size_t nmemb, FILE *stream);
int fflush(FILE *stream);
int fclose(FILE *fp);
int fputc(int c, FILE *stream);
int feof(FILE *stream);
static void assert() {}
int glob(char *pattern, int flags, void *errfn, glob_t *pglob);
void globfree(glob_t *pglob);
int stat(char *pathname, struct stat *statbuf);
char *dirname(char *path);
int strcmp(char *s1, char *s2);
int strncasecmp(char *s1, char *s2, long n);
int memcmp(char *s1, char *s2, long n);
int printf(char *fmt, ...);
int sprintf(char *buf, char *fmt, ...);
int fprintf(FILE *fp, char *fmt, ...);
int vfprintf(FILE *fp, char *fmt, va_list ap);
long strlen(char *p);
int strncmp(char *p, char *q, long n);
void *memcpy(char *dst, char *src, long n);
char *strdup(char *p);
char *strndup(char *p, long n);
int isspace(int c);
int ispunct(int c);
int isdigit(int c);
int isxdigit(int c);
char *strstr(char *haystack, char *needle);
char *strchr(char *s, int c);
double strtod(char *nptr, char **endptr);
static void va_end(va_list ap) {}
long strtoul(char *nptr, char **endptr, int base);
void exit(int code);
char *basename(char *path);
char *strrchr(char *s, int c);
int unlink(char *pathname);
int mkstemp(char *template);
int close(int fd);
int fork(void);
int execvp(char *file, char **argv);
void _exit(int code);
int wait(int *wstatus);
int atexit(void (*)(void));
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_ends_with_newline() {
        assert!(PRELUDE.ends_with(";\n"));
    }

    #[test]
    fn test_va_elem_declared_before_va_list() {
        let elem = PRELUDE.find("} __va_elem;").unwrap();
        let list = PRELUDE.find("typedef __va_elem va_list[1];").unwrap();
        let end = PRELUDE.find("static void va_end(va_list ap) {}").unwrap();
        assert!(elem < list);
        assert!(list < end);
    }

    #[test]
    fn test_va_elem_fields_in_abi_order() {
        let fields = [
            "int gp_offset;",
            "int fp_offset;",
            "void *overflow_arg_area;",
            "void *reg_save_area;",
        ];
        let positions: Vec<usize> = fields
            .iter()
            .map(|f| PRELUDE.find(f).expect("missing __va_elem field"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_opaque_structs_are_padded() {
        assert_eq!(PRELUDE.matches("char _[512];").count(), 2);
        let glob = PRELUDE.find("} glob_t;").unwrap();
        let pathv = PRELUDE.find("char **gl_pathv;").unwrap();
        assert!(pathv < glob);
    }

    #[test]
    fn test_standard_streams_declared() {
        for stream in ["stdin", "stdout", "stderr"] {
            assert!(PRELUDE.contains(&format!("extern FILE *{};", stream)));
        }
    }

    #[test]
    fn test_fixed_width_typedefs() {
        for (ty, name) in [
            ("signed char", "int8_t"),
            ("short", "int16_t"),
            ("int", "int32_t"),
            ("long", "int64_t"),
            ("unsigned char", "uint8_t"),
            ("unsigned short", "uint16_t"),
            ("unsigned int", "uint32_t"),
            ("unsigned long", "uint64_t"),
            ("unsigned long", "size_t"),
        ] {
            let decl = format!("typedef {} {};", ty, name);
            assert!(PRELUDE.contains(&decl), "missing `{}`", decl);
        }
    }

    #[test]
    fn test_errno_accessor_declared() {
        assert!(PRELUDE.contains("int *__errno_location();"));
    }

    #[test]
    fn test_only_stub_bodies() {
        let bodies: Vec<&str> = PRELUDE.lines().filter(|l| l.ends_with("{}")).collect();
        assert_eq!(
            bodies,
            vec!["static void assert() {}", "static void va_end(va_list ap) {}"]
        );
    }
}
