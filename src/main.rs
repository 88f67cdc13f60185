fn main() {
    roster::cmd::run();
}
