pub const HELP_TEXT: &str = "\
Directives:
--file [csv file name] - the name of the CSV to be parsed
--create_table - build the users table
--dry_run - runs the script but doesn't insert into the DB. All other functions will be executed.
-u - database username
-p - database password
-h - database host (an SQLite file, or a directory holding users.sqlite3)
--help - will output the list of directives with details.

Options:
--config [path] - read default credentials and the CSV delimiter from this TOML file
--json - print the import report as JSON
-v, --verbose - debug logging and full error details
";

pub fn print_help() {
    print!("{HELP_TEXT}");
}
