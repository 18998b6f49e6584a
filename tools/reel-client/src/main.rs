//! Reelbite command-line client.
//!
//! # Usage
//!
//! ```bash
//! # Browse the feed as a customer
//! reel-client --email meera@example.com --password paneer123 feed
//!
//! # Like a reel, then put it in the cart twice
//! reel-client --email meera@example.com --password paneer123 like <FOOD_ID>
//! reel-client --email meera@example.com --password paneer123 cart add <FOOD_ID> --qty 2
//!
//! # Pay for the cart
//! reel-client checkout --address "12 MG Road" upi --id meera@okaxis
//! ```
//!
//! Sessions are not kept between runs: pass `--email`/`--password` (add
//! `--partner` for a food partner account) on every command that needs one.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use reel_client::api::{ApiClient, Food, NewFood, RegisterPartner, RegisterUser};
use reel_client::cart::{CartItem, CartService};
use reel_client::checkout::place_order;
use reel_client::error::ClientError;
use reel_client::notify::{ConsoleNotifier, FollowUp, Notifier, notify_api_error};
use reel_client::payment::{CardDetails, PaymentMethod, pay};
use reel_client::store::JsonFileCartStore;
use reelbite_domain::id::FoodId;
use reelbite_domain::price::Price;

#[derive(Parser)]
#[command(about = "Browse reels, manage the cart, and place orders")]
struct Args {
    /// Base URL of the auth service
    #[arg(long, env = "REELBITE_AUTH_URL", default_value = "http://localhost:3001")]
    auth_url: String,

    /// Base URL of the food service
    #[arg(long, env = "REELBITE_FOOD_URL", default_value = "http://localhost:3000")]
    food_url: String,

    /// File the cart is kept in
    #[arg(long, env = "REELBITE_CART", default_value = "reelbite-cart.json")]
    cart: PathBuf,

    /// Log in with this email before running the command
    #[arg(long, env = "REELBITE_EMAIL")]
    email: Option<String>,

    #[arg(long, env = "REELBITE_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Log in as a food partner instead of a customer
    #[arg(long)]
    partner: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a customer account
    RegisterUser {
        #[arg(long)]
        full_name: String,
    },
    /// Create a food partner account
    RegisterPartner {
        #[arg(long)]
        name: String,
        #[arg(long)]
        contact_name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        address: String,
    },
    /// List every reel, newest first
    Feed,
    /// Show one reel
    Food { id: FoodId },
    /// Toggle a like
    Like { id: FoodId },
    /// Toggle a save
    Save { id: FoodId },
    /// List saved reels
    Saved,
    /// Show a partner and their reels
    Partner { id: String },
    /// Show the logged-in partner
    Me,
    /// Upload a new reel (partner)
    Upload {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        price: Option<String>,
        #[arg(long)]
        video: PathBuf,
    },
    /// Delete one of your reels (partner)
    Delete { id: FoodId },
    /// Inspect or change the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Place an order for the cart and pay for it
    Checkout {
        #[arg(long)]
        address: String,
        #[command(subcommand)]
        method: PayWith,
    },
}

#[derive(Subcommand)]
enum CartAction {
    Show,
    Add {
        id: FoodId,
        #[arg(long, default_value_t = 1)]
        qty: u32,
    },
    Remove {
        id: FoodId,
    },
    Qty {
        id: FoodId,
        qty: u32,
    },
    Clear,
}

#[derive(Subcommand)]
enum PayWith {
    Card {
        #[arg(long)]
        name: String,
        #[arg(long)]
        number: String,
        #[arg(long)]
        expiry: String,
        #[arg(long)]
        cvv: String,
    },
    Upi {
        #[arg(long)]
        id: String,
    },
    Cod,
}

impl From<PayWith> for PaymentMethod {
    fn from(p: PayWith) -> Self {
        match p {
            PayWith::Card {
                name,
                number,
                expiry,
                cvv,
            } => PaymentMethod::Card(CardDetails {
                name,
                number,
                expiry,
                cvv,
            }),
            PayWith::Upi { id } => PaymentMethod::Upi { id },
            PayWith::Cod => PaymentMethod::CashOnDelivery,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    let notifier = ConsoleNotifier;

    match run(args, &notifier).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<ClientError>() {
                Some(api) => {
                    if notify_api_error(&notifier, api) == FollowUp::Login {
                        eprintln!("  hint: pass --email and --password to log in");
                    }
                }
                None => notifier.error(&format!("{e:#}")),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args, notifier: &dyn Notifier) -> Result<()> {
    let api = ApiClient::new(&args.auth_url, &args.food_url)?;
    let password = args.password.clone().unwrap_or_default();

    match &args.command {
        Command::RegisterUser { full_name } => {
            let email = args.email.as_deref().context("--email is required")?;
            let session = api
                .register_user(&RegisterUser {
                    full_name,
                    email,
                    password: &password,
                })
                .await?;
            notifier.success(&format!("{} ({})", session.message, session.user.id));
            return Ok(());
        }
        Command::RegisterPartner {
            name,
            contact_name,
            phone,
            address,
        } => {
            let email = args.email.as_deref().context("--email is required")?;
            let session = api
                .register_partner(&RegisterPartner {
                    name,
                    contact_name,
                    phone,
                    email,
                    password: &password,
                    address,
                })
                .await?;
            notifier.success(&format!(
                "{} ({})",
                session.message, session.food_partner.id
            ));
            return Ok(());
        }
        _ => {}
    }

    if let Some(email) = args.email.as_deref() {
        if args.partner {
            api.login_partner(email, &password).await?;
        } else {
            api.login_user(email, &password).await?;
        }
    }

    match args.command {
        Command::RegisterUser { .. } | Command::RegisterPartner { .. } => {}
        Command::Feed => {
            for food in api.list_foods().await? {
                print_food(&food);
            }
        }
        Command::Food { id } => {
            let detail = api.get_food(id).await?;
            print_food(&detail.food);
            if let Some(partner) = detail.partner_name {
                println!("    by {partner}");
            }
        }
        Command::Like { id } => {
            let outcome = api.like(id).await?;
            notifier.success(&format!("{} ({} likes)", outcome.message, outcome.like_count));
        }
        Command::Save { id } => {
            let outcome = api.save(id).await?;
            notifier.success(&format!("{} ({} saves)", outcome.message, outcome.saves_count));
        }
        Command::Saved => {
            for food in api.saved_foods().await? {
                print_food(&food);
            }
        }
        Command::Partner { id } => {
            let profile = api.partner_profile(&id).await?;
            println!("{} · {}", profile.partner.name, profile.partner.address);
            for food in &profile.food_items {
                print_food(food);
            }
        }
        Command::Me => {
            let me = api.partner_me().await?;
            println!("{} <{}>", me.name, me.email);
            println!("  contact: {} {}", me.contact_name, me.phone);
            println!("  address: {}", me.address);
        }
        Command::Upload {
            name,
            description,
            price,
            video,
        } => {
            let food = api
                .create_food(NewFood {
                    name: &name,
                    description: &description,
                    price: price.as_deref(),
                    video: &video,
                })
                .await?;
            notifier.success(&format!("uploaded {} ({})", food.name, food.id));
        }
        Command::Delete { id } => {
            api.delete_food(id).await?;
            notifier.success("food deleted");
        }
        Command::Cart { action } => {
            let mut cart = CartService::open(JsonFileCartStore::new(&args.cart));
            match action {
                CartAction::Show => {}
                CartAction::Add { id, qty } => {
                    let detail = api.get_food(id).await?;
                    cart.add(cart_item(id, &detail.food)?, qty)?;
                }
                CartAction::Remove { id } => cart.remove(id)?,
                CartAction::Qty { id, qty } => cart.set_qty(id, qty)?,
                CartAction::Clear => cart.clear()?,
            }
            print_cart(&cart);
        }
        Command::Checkout { address, method } => {
            let mut cart = CartService::open(JsonFileCartStore::new(&args.cart));
            let order = place_order(&cart, &address)?;
            let receipt = pay(&mut cart, &order, &method.into())?;
            notifier.success(&format!(
                "order {} paid by {}: ₹ {:.2}",
                receipt.order_id, receipt.method, receipt.amount
            ));
        }
    }
    Ok(())
}

fn cart_item(id: FoodId, food: &Food) -> Result<CartItem> {
    Ok(CartItem {
        item_id: id,
        title: if food.name.is_empty() {
            "Food item".to_owned()
        } else {
            food.name.clone()
        },
        price: Price::new(food.price).context("service returned an invalid price")?,
        vendor_id: Some(food.food_partner_id.clone()),
        image: None,
        qty: 1,
    })
}

fn print_food(food: &Food) {
    println!(
        "{}  {}  ₹ {:.2}  ♥ {}  ★ {}",
        food.id, food.name, food.price, food.like_count, food.saves_count
    );
}

fn print_cart(cart: &CartService<JsonFileCartStore>) {
    if cart.is_empty() {
        println!("cart is empty");
        return;
    }
    for item in cart.items() {
        println!(
            "{:>2} × {}  ₹ {:.2}  ({})",
            item.qty,
            item.title,
            item.line_total(),
            item.item_id
        );
    }
    let totals = cart.totals();
    println!("subtotal  ₹ {:.2}", totals.subtotal);
    if totals.shipping == 0.0 {
        println!("shipping  free");
    } else {
        println!("shipping  ₹ {:.2}", totals.shipping);
    }
    println!("total     ₹ {:.2}", totals.total);
}
